//! Countries, configuration and SEO metadata

use super::{Resource, get};
use crate::{client::Client, error::Result, http::segment, response::ApiResponse};

/// Site-level metadata: countries, per-country configuration, SEO content
/// and translations.
///
/// `language` is a language code such as `en`; `country_code` an ISO
/// alpha-2 code such as `GB`; `entity_type` one of `team`, `player`,
/// `unique-tournament`, ...
#[derive(Debug, Clone, Copy)]
pub struct Meta<'a> {
    client: &'a Client,
}

impl Resource for Meta<'_> {
    fn client(&self) -> &Client {
        self.client
    }
}

impl<'a> Meta<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// All countries with their alpha-2 codes.
    pub async fn countries(&self) -> Result<ApiResponse> {
        get(self, "meta_countries", "/api/v1/country/alpha2".to_string()).await
    }

    /// Sport ordering for the caller's country.
    pub async fn country_sport_priorities(&self) -> Result<ApiResponse> {
        get(
            self,
            "meta_country_sport_priorities",
            "/api/v1/config/country-sport-priorities/country".to_string(),
        )
        .await
    }

    /// Sport ordering for a given country.
    pub async fn country_sport_priorities_for(&self, country_code: &str) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(
            self,
            "meta_country_sport_priorities_for",
            format!("/api/v1/config/country-sport-priorities/country/{country_code}"),
        )
        .await
    }

    /// Tournaments shown by default in a country.
    pub async fn default_unique_tournaments(&self, country_code: &str) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(
            self,
            "meta_default_unique_tournaments",
            format!("/api/v1/config/default-unique-tournaments/{country_code}/football"),
        )
        .await
    }

    /// Footer links.
    pub async fn footer_config(&self, language: &str) -> Result<ApiResponse> {
        let language = segment("language", language)?;
        get(self, "meta_footer_config", format!("/api/v1/config/footer/{language}")).await
    }

    /// SEO metadata of an entity page.
    pub async fn entity_meta(
        &self,
        entity_type: &str,
        entity_id: u64,
        language: &str,
    ) -> Result<ApiResponse> {
        let entity_type = segment("entity_type", entity_type)?;
        let language = segment("language", language)?;
        get(
            self,
            "meta_entity_meta",
            format!("/api/v1/seo/entity-meta/{entity_type}/{entity_id}/language/{language}"),
        )
        .await
    }

    /// SEO text of an entity page.
    pub async fn seo_content(
        &self,
        entity_type: &str,
        entity_id: u64,
        language: &str,
    ) -> Result<ApiResponse> {
        let entity_type = segment("entity_type", entity_type)?;
        let language = segment("language", language)?;
        get(
            self,
            "meta_seo_content",
            format!("/api/v1/seo/content/{entity_type}/{entity_id}/{language}"),
        )
        .await
    }

    /// SEO metadata of the football landing page.
    pub async fn football_seo_meta(&self, language: &str) -> Result<ApiResponse> {
        let language = segment("language", language)?;
        get(
            self,
            "meta_football_seo_meta",
            format!("/api/v1/seo/entity-meta/sport/football/language/{language}"),
        )
        .await
    }

    /// SEO text of the football landing page.
    pub async fn football_seo_content(&self, language: &str) -> Result<ApiResponse> {
        let language = segment("language", language)?;
        get(
            self,
            "meta_football_seo_content",
            format!("/api/v1/seo/content/sport/football/{language}"),
        )
        .await
    }

    /// Translated description of an entity.
    pub async fn translation_description(&self, id: u64, language: &str) -> Result<ApiResponse> {
        let language = segment("language", language)?;
        get(
            self,
            "meta_translation_description",
            format!("/api/v1/translation/description/{id}/language/{language}"),
        )
        .await
    }

    /// Betting brands shown in a country.
    pub async fn branding_providers(&self, country_code: &str) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(
            self,
            "meta_branding_providers",
            format!("/api/v1/branding/providers/{country_code}/web"),
        )
        .await
    }

    /// Sign-up offer link for a country.
    pub async fn signup_link(&self, country_code: &str) -> Result<ApiResponse> {
        let country_code = segment("country_code", country_code)?;
        get(self, "meta_signup_link", format!("/api/v1/offers/signuplink/{country_code}/web")).await
    }
}
