use crate::core::{ConfigProvider, Entity, Introspector, MusicalEntityInterface};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IntrospectionReport {
    pub introspected: usize,
    pub skipped: usize,
    pub failed: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl IntrospectionReport {
    fn start() -> Self {
        Self {
            introspected: 0,
            skipped: 0,
            failed: 0,
            started_at: Utc::now(),
            finished_at: Utc::now(),
        }
    }

    pub fn total(&self) -> usize {
        self.introspected + self.skipped + self.failed
    }
}

pub struct IntrospectionEngine<I: Introspector> {
    introspector: I,
    force: bool,
    fail_fast: bool,
}

impl<I: Introspector> IntrospectionEngine<I> {
    pub fn new(introspector: I) -> Self {
        Self {
            introspector,
            force: false,
            fail_fast: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(introspector: I, config: &C) -> Self {
        Self {
            introspector,
            force: config.force_introspection(),
            fail_fast: config.fail_fast(),
        }
    }

    /// Re-run the lookup on entities that are already introspected.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Stop at the first lookup error instead of counting it and moving on.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub async fn run(&self, entities: &mut [Entity]) -> Result<IntrospectionReport> {
        let mut report = IntrospectionReport::start();
        tracing::info!("Introspecting {} entities", entities.len());

        for entity in entities.iter_mut() {
            if entity.is_introspected() && !self.force {
                tracing::debug!("Skipping {} (already introspected)", entity.label());
                report.skipped += 1;
                continue;
            }

            match self.introspector.introspect(entity).await {
                Ok(Some(metadata)) => {
                    tracing::debug!("{}: {} metadata entries", entity.label(), metadata.len());
                    entity.set_introspected(Some(metadata));
                    report.introspected += 1;
                }
                Ok(None) => {
                    tracing::debug!("{}: no metadata found", entity.label());
                    entity.set_introspected(None);
                    report.introspected += 1;
                }
                Err(e) if self.fail_fast => {
                    tracing::error!("❌ {}: {}", entity.label(), e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("⚠️ {}: {}", entity.label(), e);
                    report.failed += 1;
                }
            }
        }

        report.finished_at = Utc::now();
        tracing::info!(
            "Introspection done: {} introspected, {} skipped, {} failed",
            report.introspected,
            report.skipped,
            report.failed
        );

        Ok(report)
    }
}
