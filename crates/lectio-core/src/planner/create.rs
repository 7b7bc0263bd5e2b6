//! Plan creation from every supported source.

use jiff::civil::Date;
use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{PlannerError, Result},
    extract,
    fetch::{GeneratorClient, UpstreamQuery},
    generator::{self, GeneratedDay},
    ics,
    models::{Plan, PlanSource},
    params::{CreateLocalPlan, CreatePresetPlan, CreateRemotePlan, ImportIcsPlan},
    presets,
};

impl Planner {
    /// Creates a plan by querying the upstream generator site and scraping
    /// the reading references out of its response.
    pub async fn create_remote_plan(&self, params: &CreateRemotePlan) -> Result<Plan> {
        params.parameters.validate()?;

        let client = GeneratorClient::new(&self.generator_url)?;
        let query = UpstreamQuery {
            start_date: params.start_date,
            parameters: params.parameters.clone(),
        };
        let html = client.fetch_plan_html(&query).await?;

        let references = extract::extract_references(&html);
        debug!("Extracted {} references from upstream response", references.len());
        if references.is_empty() {
            return Err(PlannerError::no_readings("the generator response"));
        }

        let days = references
            .into_iter()
            .enumerate()
            .map(|(i, reference)| {
                let day_index = i as u32 + 1;
                Ok(GeneratedDay {
                    day_index,
                    date: generator::date_for_day(params.start_date, day_index)?,
                    readings: vec![reference],
                    meditation_theme: None,
                    prayer_subjects: None,
                    memory_verse: None,
                    notes: None,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let source = PlanSource::Remote {
            parameters: params.parameters.clone(),
        };
        self.persist_plan(params.name.clone(), params.start_date, source, days)
            .await
    }

    /// Creates a plan with the local generator. No network access.
    pub async fn create_local_plan(&self, params: &CreateLocalPlan) -> Result<Plan> {
        let days = generator::generate(&params.parameters, params.start_date, &mut rand::rng())?;

        let source = PlanSource::Local {
            parameters: params.parameters.clone(),
        };
        self.persist_plan(params.name.clone(), params.start_date, source, days)
            .await
    }

    /// Creates a plan from a named preset. Unknown slugs fall back to the
    /// default preset.
    pub async fn create_preset_plan(&self, params: &CreatePresetPlan) -> Result<Plan> {
        let preset = presets::resolve(&params.slug);
        let (name, days) =
            presets::generate_from_preset(&params.slug, params.start_date, &params.profile)?;

        let source = PlanSource::Preset {
            slug: preset.slug.to_string(),
            profile: params.profile.clone(),
        };
        self.persist_plan(name, params.start_date, source, days).await
    }

    /// Creates a plan by downloading and parsing an ICS calendar document.
    pub async fn import_ics_plan(&self, params: &ImportIcsPlan) -> Result<Plan> {
        let client = GeneratorClient::new(&self.generator_url)?;
        let text = client.fetch_ics(&params.url).await?;
        self.import_ics_text(&params.name, &params.url, &text).await
    }

    /// Creates a plan from ICS text already in hand (e.g. read from a local
    /// file). The source label is recorded as the import origin.
    pub async fn import_ics_text(&self, name: &str, source_label: &str, text: &str) -> Result<Plan> {
        let days = ics::import_from_ics(text)?;
        // Day sequences from import_from_ics are never empty.
        let start_date = days[0].date;

        let source = PlanSource::Import {
            url: source_label.to_string(),
        };
        self.persist_plan(name.to_string(), start_date, source, days)
            .await
    }

    /// Persists a generated day sequence as a new plan.
    async fn persist_plan(
        &self,
        name: String,
        start_date: Date,
        source: PlanSource,
        days: Vec<GeneratedDay>,
    ) -> Result<Plan> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_plan_with_days(&name, start_date, &source, &days)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
