//! Threads OAuth 콜백 서비스 메인 애플리케이션
//!
//! 설정을 로드/검증하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use threads_oauth_callback::config::{Profile, ServerConfig, ThreadsOAuthConfig};
use threads_oauth_callback::errors::AppError;
use threads_oauth_callback::routes::configure_all_routes;
use threads_oauth_callback::services::auth::{HttpThreadsGateway, ThreadsAuthService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 로깅 먼저 초기화해야 .env 로드 결과가 기록됨
    init_logging();
    load_env_file();

    info!("🚀 Threads OAuth 콜백 서비스 시작중...");

    let service = match build_service() {
        Ok(service) => service,
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    info!("✅ Threads OAuth 설정 검증 완료");

    start_http_server(web::Data::new(service)).await
}

/// 설정을 검증하고 서비스 인스턴스를 만듭니다
///
/// 필수 환경 변수가 없으면 `AppError::ConfigError`로 즉시 실패합니다.
fn build_service() -> Result<ThreadsAuthService, AppError> {
    let config = ThreadsOAuthConfig::from_env()?;
    info!("Threads 설정 로드됨: {:?}", config);

    let gateway = Arc::new(HttpThreadsGateway::from_config(&config)?);

    Ok(ThreadsAuthService::new(config, gateway))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(service: web::Data<ThreadsAuthService>) -> std::io::Result<()> {
    let (host, port) = ServerConfig::bind_address();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);
    info!("📍 OAuth callback: http://{}:{}/api/threads/callback", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind((host, port))?
        .run()
        .await
}

/// 실행 프로필에 맞는 .env 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev (기본값)
/// * `PROFILE=prod` - .env.prod
/// * 기타 - .env
fn load_env_file() {
    let profile = Profile::current();
    let file = profile.env_file();

    info!("Current profile: {:?}", profile);

    match dotenv::from_filename(file) {
        Ok(_) => info!("{} 파일 로드 됨", file),
        Err(e) => warn!("{} 파일 로드 실패: {}", file, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
