use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::hours::{StatusPolicy, StatusTexts};
use crate::input::json_input::TripPlan;
use crate::input::toml_input::Preferences;
use crate::utils;

pub struct Config {
    plan: TripPlan,
    preferences: Preferences,
    output: Option<PathBuf>,
}

pub struct ConfigBuilder {
    plan: TripPlan,
    preferences: Preferences,
    output: Option<PathBuf>,
}

impl ConfigBuilder {
    fn new(plan: TripPlan) -> Self {
        Self {
            plan,
            preferences: Preferences::default(),
            output: None,
        }
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn preferences(&mut self, preferences: Preferences) -> &mut Self {
        self.preferences = preferences;
        self
    }

    pub fn preferences_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<&mut Self> {
        let preferences = utils::toml_from_reader(File::open(path.as_ref())?)
            .with_context(|| format!("failed to parse `{}`", path.as_ref().display()))?;

        Ok(self.preferences(preferences))
    }

    #[must_use]
    pub fn build(self) -> Config {
        Config {
            plan: self.plan,
            preferences: self.preferences,
            output: self.output,
        }
    }
}

impl Config {
    #[must_use]
    pub fn from_plan(plan: TripPlan) -> ConfigBuilder {
        ConfigBuilder::new(plan)
    }

    pub fn try_from_json_file(plan: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let plan: TripPlan = utils::json_from_reader(File::open(plan.as_ref())?)
            .with_context(|| format!("failed to parse `{}`", plan.as_ref().display()))?;

        Ok(Self::from_plan(plan))
    }

    #[must_use]
    pub fn plan(&self) -> &TripPlan {
        &self.plan
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn policy(&self) -> StatusPolicy {
        self.preferences.policy()
    }

    #[must_use]
    pub fn texts(&self) -> &StatusTexts {
        self.preferences.texts()
    }

    #[must_use]
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}
