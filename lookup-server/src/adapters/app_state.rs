use std::{sync::Arc, time::Duration};

use crate::{
    app_config::AppConfig,
    application::services::{ip_info_service::IpInfoService, profile_service::ProfileService},
    config::Config,
    domain::ports::ip_info::IpInfoProvider,
    infrastructure::{
        providers::{
            abstractapi_com::AbstractApiCom, ipapi_co::IpapiCo, ipgeolocation_io::IpGeolocationIo,
            Retrying,
        },
        repository::boxapi_repository::BoxApiRepository,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService<BoxApiRepository>>,
    pub ip_info_service: Arc<IpInfoService>,
}

impl AppState {
    pub fn new(config: &Config, app_config: &AppConfig) -> Self {
        let repo = BoxApiRepository::new(
            &config.boxapi_username,
            &config.boxapi_password,
            Some(app_config.boxapi_config()),
        );
        let profile_service = ProfileService::new(repo, app_config.profile_retry)
            .with_image_timeout(Duration::from_secs(app_config.image_timeout_secs));

        Self {
            profile_service: Arc::new(profile_service),
            ip_info_service: Arc::new(ip_info_chain(config, app_config)),
        }
    }
}

/// ipapi.co, then abstractapi.com, then ipgeolocation.io. Keyed providers
/// without a configured key are left out.
fn ip_info_chain(config: &Config, app_config: &AppConfig) -> IpInfoService {
    let retry = app_config.ip_provider_retry;
    let mut providers: Vec<Arc<dyn IpInfoProvider>> = vec![Arc::new(Retrying::new(
        IpapiCo::new(&app_config.ipapi_co_url),
        retry,
    ))];

    match &config.abstractapi_token {
        Some(token) => providers.push(Arc::new(Retrying::new(
            AbstractApiCom::new(&app_config.abstractapi_url, token),
            retry,
        ))),
        None => tracing::warn!("ABSTRACTAPI_TOKEN not configured, skipping abstractapi.com"),
    }

    match &config.ipgeolocation_token {
        Some(token) => providers.push(Arc::new(Retrying::new(
            IpGeolocationIo::new(&app_config.ipgeolocation_url, token),
            retry,
        ))),
        None => tracing::warn!("IPGEOLOCATION_TOKEN not configured, skipping ipgeolocation.io"),
    }

    IpInfoService::new(providers)
}
