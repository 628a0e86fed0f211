use boxapi_rs::BoxApi;

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::FmtSubscriber;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let username = std::env::var("BOXAPI_USERNAME").unwrap_or_else(|_| "YOUR_USERNAME".into());
    let password = std::env::var("BOXAPI_PASSWORD").unwrap_or_else(|_| "YOUR_PASSWORD".into());
    let boxapi = BoxApi::init(&username, &password, None);

    match boxapi.instagram.web_profile_info("instagram").await {
        Ok(profile) => {
            let user = &profile["response"]["body"]["data"]["user"];
            println!("full_name: {}", user["full_name"]);
            println!("followers: {}", user["edge_followed_by"]["count"]);
        }
        Err(e) => eprintln!("lookup failed: {}", e),
    }
}
