use portfolio_cms::domain::model::Resource;
use portfolio_cms::infra::telemetry;
use portfolio_cms::storage::{DocumentStore, Filter, PgDocumentStore};
use portfolio_cms::{AppConfig, Category, Contact, Photo, Photographer, Service, Testimonial};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL\n\
         Optional:\n\
           DB_NAME (default portfolio), BIND_ADDR, DB_MAX_CONNECTIONS, SEED_DEFAULTS\n"
    );
    std::process::exit(2);
}

const COLLECTIONS: [&str; 6] = [
    Photographer::COLLECTION,
    Category::COLLECTION,
    Photo::COLLECTION,
    Testimonial::COLLECTION,
    Contact::COLLECTION,
    Service::COLLECTION,
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (readable error if something is missing)
    let config = AppConfig::from_env()?;

    println!("> Preflight:");
    println!("  DB_NAME={}", config.db_name);
    println!("  BIND_ADDR={}", config.bind_addr);
    println!("  DB_MAX_CONNECTIONS={}", config.max_connections);
    println!("  SEED_DEFAULTS={}", config.seed_defaults);

    let store = PgDocumentStore::connect(&config.database_url, &config.db_name, 1)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to DATABASE_URL: {}", e))?;
    store
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Database ping failed: {}", e))?;
    println!("  Database reachable.");

    // Read-only: report what exists without creating anything.
    for collection in COLLECTIONS {
        match store.count(collection, &Filter::new()).await {
            Ok(n) => println!("  {:<14} {} document(s)", collection, n),
            Err(e) if e.is_missing_collection() => {
                println!("  {:<14} missing (created on first server start)", collection)
            }
            Err(e) => {
                store.close().await;
                return Err(anyhow::anyhow!("Failed to count '{}': {}", collection, e));
            }
        }
    }

    store.close().await;
    println!("> Preflight OK.");
    Ok(())
}
