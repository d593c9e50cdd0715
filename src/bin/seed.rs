//! Seed script for development — populates the data directory with demo
//! catalog content.
//!
//! Usage: `cargo run --bin seed`
//!
//! Reads `SHASHA_DATA_DIR` (defaults to `./data`, created if missing).

use chrono::Utc;
use shasha::config::AppConfig;
use shasha::models::ad::{Ad, AdPosition};
use shasha::models::movie::Movie;
use shasha::models::series::{Series, SeriesStatus};
use shasha::models::server::{ServerKind, ServerStatus, StreamServer};
use shasha::models::user::{User, UserRole};
use shasha::store::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    std::fs::create_dir_all(&config.data_dir)?;
    let catalog = Catalog::open(&config.data_dir);

    println!("=== shasha seed script ===");
    println!("data dir: {}", config.data_dir.display());

    catalog.movies.replace_all(demo_movies()).await?;
    println!("[done] movies");
    catalog.series.replace_all(demo_series()).await?;
    println!("[done] series");
    catalog.ads.replace_all(demo_ads()).await?;
    println!("[done] ads");
    catalog.servers.replace_all(demo_servers()).await?;
    println!("[done] servers");
    catalog.users.replace_all(demo_users()).await?;
    println!("[done] users");

    println!("\n=== Seed complete! ===");
    Ok(())
}

fn demo_movies() -> Vec<Movie> {
    let now = Utc::now();
    let movie = |id: &str,
                 title: &str,
                 original_title: Option<&str>,
                 category: &str,
                 year: i64,
                 rating: f64,
                 views: u64,
                 featured: bool,
                 trending: bool| Movie {
        id: id.to_string(),
        title: title.to_string(),
        original_title: original_title.map(str::to_string),
        description: None,
        category: Some(category.to_string()),
        year: Some(year),
        quality: Some("WEB-DL".to_string()),
        rating,
        views,
        poster_url: None,
        is_featured: featured,
        is_trending: trending,
        created_at: now,
        updated_at: now,
    };
    vec![
        movie("mov-1", "The Blue Elephant", Some("الفيل الأزرق"), "thriller", 2014, 8.0, 54_200, true, false),
        movie("mov-2", "Kira & El Gin", Some("كيرة والجن"), "drama", 2022, 7.5, 40_310, true, true),
        movie("mov-3", "Sons of Rizk", Some("ولاد رزق"), "action", 2015, 7.2, 33_950, false, true),
        movie("mov-4", "Sheikh Jackson", None, "drama", 2017, 6.9, 12_400, false, false),
        movie("mov-5", "Diamond Dust", Some("تراب الماس"), "thriller", 2018, 7.0, 18_760, false, false),
    ]
}

fn demo_series() -> Vec<Series> {
    let now = Utc::now();
    let series = |id: &str,
                  title: &str,
                  category: &str,
                  seasons: u32,
                  episodes: u32,
                  status: SeriesStatus,
                  rating: f64,
                  views: u64| Series {
        id: id.to_string(),
        title: title.to_string(),
        original_title: None,
        description: None,
        category: Some(category.to_string()),
        seasons,
        episodes,
        status,
        rating,
        views,
        poster_url: None,
        is_featured: false,
        created_at: now,
        updated_at: now,
    };
    vec![
        series("ser-1", "El Ekhteyar", "drama", 3, 90, SeriesStatus::Completed, 8.6, 88_000),
        series("ser-2", "Grand Hotel", "mystery", 1, 30, SeriesStatus::Completed, 8.1, 47_500),
        series("ser-3", "Suits Arabia", "drama", 1, 15, SeriesStatus::Ongoing, 6.8, 21_300),
    ]
}

fn demo_ads() -> Vec<Ad> {
    let now = Utc::now();
    vec![Ad {
        id: "ad-1".to_string(),
        title: "Ramadan marathon".to_string(),
        content: Some("All series, one place".to_string()),
        image_url: None,
        target_url: "https://promo.example.com/ramadan".to_string(),
        position: AdPosition::Header,
        is_active: true,
        click_count: 0,
        impression_count: 0,
        created_at: now,
        updated_at: now,
    }]
}

fn demo_servers() -> Vec<StreamServer> {
    let now = Utc::now();
    vec![
        StreamServer {
            id: "srv-1".to_string(),
            name: "primary-embed".to_string(),
            url: "https://embed.example.com".to_string(),
            kind: ServerKind::Embed,
            status: ServerStatus::Online,
            priority: 10,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
        StreamServer {
            id: "srv-2".to_string(),
            name: "backup-direct".to_string(),
            url: "https://cdn.example.com".to_string(),
            kind: ServerKind::Direct,
            status: ServerStatus::Online,
            priority: 50,
            is_active: true,
            created_at: now,
            updated_at: now,
        },
    ]
}

fn demo_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: "usr-1".to_string(),
            username: "admin".to_string(),
            email: "admin@shasha.local".to_string(),
            display_name: Some("Site Administrator".to_string()),
            role: UserRole::Admin,
            is_active: true,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        },
        User {
            id: "usr-2".to_string(),
            username: "moderator".to_string(),
            email: "mod@shasha.local".to_string(),
            display_name: None,
            role: UserRole::Moderator,
            is_active: true,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        },
    ]
}
