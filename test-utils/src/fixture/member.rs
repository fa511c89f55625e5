//! Member fixtures for creating in-memory test data.

use entity::member;

/// Default test member name.
pub const DEFAULT_NAME: &str = "Test Member";

/// Default test member email.
pub const DEFAULT_EMAIL: &str = "member@roomescape.test";

/// Default stored password value.
///
/// This is not a valid argon2 hash; factories that need a member able to log in
/// must set a real hash.
pub const DEFAULT_PASSWORD: &str = "not-a-hash";

/// Default member role.
pub const DEFAULT_ROLE: &str = "USER";

/// Creates a member entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Member"`
/// - email: `"member@roomescape.test"`
/// - password: `"not-a-hash"`
/// - role: `"USER"`
pub fn entity() -> member::Model {
    entity_builder().build()
}

/// Creates a member entity builder for customization.
pub fn entity_builder() -> MemberEntityBuilder {
    MemberEntityBuilder::default()
}

/// Builder for creating customized member entity models.
pub struct MemberEntityBuilder {
    id: i32,
    name: String,
    email: String,
    password: String,
    role: String,
}

impl Default for MemberEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

impl MemberEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and returns the member entity model.
    pub fn build(self) -> member::Model {
        member::Model {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }
}
