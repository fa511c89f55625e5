//! Theme fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating theme entity models without database insertion.

use entity::theme;

/// Default test theme name.
pub const DEFAULT_NAME: &str = "Test Theme";

/// Default test theme description.
pub const DEFAULT_DESCRIPTION: &str = "Escape before the clock runs out";

/// Default test theme thumbnail URL.
pub const DEFAULT_THUMBNAIL: &str = "https://roomescape.test/thumbnail.png";

/// Creates a theme entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Theme"`
/// - description: `"Escape before the clock runs out"`
/// - thumbnail: `"https://roomescape.test/thumbnail.png"`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let theme = fixture::theme::entity();
/// assert_eq!(theme.name, "Test Theme");
/// ```
pub fn entity() -> theme::Model {
    entity_builder().build()
}

/// Creates a theme entity builder for customization.
pub fn entity_builder() -> ThemeEntityBuilder {
    ThemeEntityBuilder::default()
}

/// Builder for creating customized theme entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct ThemeEntityBuilder {
    id: i32,
    name: String,
    description: String,
    thumbnail: String,
}

impl Default for ThemeEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
        }
    }
}

impl ThemeEntityBuilder {
    /// Sets the theme ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the theme name.
    ///
    /// # Arguments
    /// - `name` - Display name, unique across themes
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the theme description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the thumbnail URL.
    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Builds and returns the theme entity model.
    pub fn build(self) -> theme::Model {
        theme::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
        }
    }
}
