use crate::{
    model::theme::{CreateThemeDto, ThemeDto},
    server::error::validation::ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl Theme {
    pub fn into_dto(self) -> ThemeDto {
        ThemeDto {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
        }
    }

    pub fn from_entity(entity: entity::theme::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            thumbnail: entity.thumbnail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateThemeParams {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
}

impl CreateThemeParams {
    /// Builds theme creation parameters, rejecting a blank name.
    pub fn from_dto(dto: CreateThemeDto) -> Result<Self, ValidationError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::BlankField("Theme name"));
        }

        Ok(Self {
            name,
            description: dto.description,
            thumbnail: dto.thumbnail,
        })
    }
}
