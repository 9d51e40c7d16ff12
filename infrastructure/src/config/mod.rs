//! Environment configuration loading for quote-sender
//!
//! Settings come from the process environment. A local `.env` file may be
//! imported into the environment first (see [`load_dotenv`]); variables that
//! are already set keep their values.
//!
//! | Variable | Effect |
//! |---|---|
//! | `RECIPIENT_PHONE_NUMBERS` | comma-delimited recipients (required) |
//! | `AI_PROVIDER` | `openai`, anything else means mock |
//! | `OPENAI_API_KEY` | required with `AI_PROVIDER=openai` |
//! | `OPENAI_MODEL` | default `gpt-4o-mini` |
//! | `OPENAI_BASE_URL` | default `https://api.openai.com` |
//! | `NOTIFICATION_PROVIDER` | `sns`, anything else means mock |
//! | `SNS_TOPIC_ARN` | required with `NOTIFICATION_PROVIDER=sns` |
//! | `AWS_REGION` | default `us-east-2` |
//! | `AWS_PROFILE` | optional shared-credentials profile |

mod credentials;
mod dotenv;
mod env_source;
mod loader;

pub use credentials::{AwsCredentialChain, BackendCredentials};
pub use dotenv::load_dotenv;
pub use env_source::EnvSource;
pub use loader::{EnvConfigLoader, keys};
