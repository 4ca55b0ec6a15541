//! Remote character catalog
//!
//! Characters (name + sprite) come from the public PokeAPI. The game core
//! never calls this module directly; lookups run from the menu screens only,
//! so a slow or failed request can never stall a physics frame. Not-found and
//! transport failure look the same to the caller: no record, stay in the
//! menu.

use serde::Deserialize;
use thiserror::Error;

/// Catalog endpoint
const BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// The default roster shown on the start menu, in display order
const DEFAULT_IDS: [u32; 10] = [1, 4, 7, 25, 39, 52, 94, 133, 143, 150];

/// A playable character as resolved from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: u32,
    /// Display name, capitalized
    pub name: String,
    /// Sprite image URL
    pub sprite: String,
}

/// Lookup failures. Callers usually collapse these to "no record".
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("no such character: {0}")]
    NotFound(String),
    #[error("character {0} has no sprite")]
    MissingSprite(String),
}

/// Wire format of a catalog entry, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct ApiCharacter {
    id: u32,
    name: String,
    sprites: ApiSprites,
}

#[derive(Debug, Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
    other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiOtherSprites {
    showdown: Option<ApiShowdownSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiShowdownSprites {
    front_default: Option<String>,
}

impl ApiCharacter {
    /// Prefer the animated showdown sprite, fall back to the static one
    fn into_record(self) -> Result<CharacterRecord, CatalogError> {
        let showdown = self
            .sprites
            .other
            .and_then(|o| o.showdown)
            .and_then(|s| s.front_default);
        let sprite = showdown
            .or(self.sprites.front_default)
            .ok_or_else(|| CatalogError::MissingSprite(self.name.clone()))?;

        let mut chars = self.name.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => self.name.clone(),
        };

        Ok(CharacterRecord {
            id: self.id,
            name,
            sprite,
        })
    }
}

/// Client for the remote character catalog
pub struct CharacterCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl Default for CharacterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterCatalog {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    async fn fetch(&self, key: &str) -> Result<CharacterRecord, CatalogError> {
        let url = format!("{}/{}", self.base_url, key);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::NotFound(key.to_string()));
        }
        let api: ApiCharacter = response.json().await?;
        api.into_record()
    }

    /// The fixed default roster. Entries that fail to resolve are logged and
    /// skipped; the order of the survivors is preserved.
    pub async fn list_defaults(&self) -> Vec<CharacterRecord> {
        let mut records = Vec::with_capacity(DEFAULT_IDS.len());
        for id in DEFAULT_IDS {
            match self.fetch(&id.to_string()).await {
                Ok(record) => records.push(record),
                Err(err) => log::error!("failed to fetch character {id}: {err}"),
            }
        }
        records
    }

    /// Case-insensitive exact-name search. Returns `None` for both not-found
    /// and transport failure; the caller must not start a game either way.
    pub async fn search(&self, query: &str) -> Option<CharacterRecord> {
        match self.fetch(&query.to_lowercase()).await {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("search for {query:?} failed: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "sprites": {
            "front_default": "https://img.test/25.png",
            "other": {
                "showdown": {
                    "front_default": "https://img.test/showdown/25.gif"
                }
            }
        }
    }"#;

    #[test]
    fn test_decode_prefers_showdown_sprite() {
        let api: ApiCharacter = serde_json::from_str(SAMPLE).unwrap();
        let record = api.into_record().unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.name, "Pikachu");
        assert_eq!(record.sprite, "https://img.test/showdown/25.gif");
    }

    #[test]
    fn test_decode_falls_back_to_static_sprite() {
        let json = r#"{
            "id": 1,
            "name": "bulbasaur",
            "sprites": { "front_default": "https://img.test/1.png" }
        }"#;
        let api: ApiCharacter = serde_json::from_str(json).unwrap();
        let record = api.into_record().unwrap();
        assert_eq!(record.sprite, "https://img.test/1.png");
    }

    #[test]
    fn test_decode_rejects_spriteless_entry() {
        let json = r#"{
            "id": 9,
            "name": "ghost",
            "sprites": { "front_default": null }
        }"#;
        let api: ApiCharacter = serde_json::from_str(json).unwrap();
        assert!(matches!(
            api.into_record(),
            Err(CatalogError::MissingSprite(_))
        ));
    }
}
