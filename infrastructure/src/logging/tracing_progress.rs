//! `tracing` backed run progress.
//!
//! One event per state transition (debug) and one per milestone (info),
//! with structured fields so JSON output stays queryable.

use quote_sender_application::{NotifierSettings, NotifyError, RunConfig, RunProgress};
use quote_sender_domain::{Quote, RunState};
use tracing::{debug, info, warn};

/// Progress reporter that logs through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingProgress;

impl RunProgress for TracingProgress {
    fn on_transition(&self, from: RunState, to: RunState) {
        debug!(from = %from, to = %to, "run state changed");
    }

    fn on_config_loaded(&self, config: &RunConfig) {
        info!(
            recipients = config.recipients().len(),
            ai_provider = %config.quote_provider.kind(),
            notification_provider = %config.notifier.kind(),
            "configuration loaded"
        );
        if let NotifierSettings::Sns(sns) = &config.notifier {
            debug!(topic_arn = %sns.topic_arn, region = %sns.region, "SNS settings");
        }
    }

    fn on_quote_generated(&self, quote: &Quote) {
        info!(quote = %quote, "quote generated");
    }

    fn on_delivery(&self, recipient: &str, result: &Result<(), NotifyError>) {
        match result {
            Ok(()) => info!(phone = recipient, "quote sent"),
            Err(e) if e.is_validation() => {
                warn!(phone = recipient, error = %e, "recipient rejected before delivery")
            }
            Err(e) => warn!(phone = recipient, error = %e, "quote delivery failed"),
        }
    }
}
