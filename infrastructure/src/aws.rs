//! Shared AWS SDK configuration loading

use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load SDK configuration for `region` through the default credential chain
/// (environment, shared credentials file, instance/task role).
pub async fn load_sdk_config(region: &str, profile: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()));

    if let Some(profile) = profile {
        loader = loader.profile_name(profile);
    }

    loader.load().await
}
