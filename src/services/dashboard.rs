//! Dashboard statistics aggregated from the live stores.
//!
//! Every number here is computed from actual catalog state; nothing is
//! synthesized or randomized.

use serde::Serialize;

use crate::store::Catalog;

/// Aggregated statistics for the admin overview page.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_movies: i64,
    pub total_series: i64,
    pub total_users: i64,
    pub total_servers: i64,
    pub active_ads: i64,
    pub featured_movies: i64,
    pub trending_movies: i64,
    pub average_movie_rating: f64,
    pub total_views: u64,
    pub top_viewed: Vec<TopViewed>,
    pub ad_totals: AdTotals,
}

/// Most-viewed titles across movies and series.
#[derive(Debug, Serialize)]
pub struct TopViewed {
    pub id: String,
    pub title: String,
    pub views: u64,
}

/// Click and impression totals across all ads.
#[derive(Debug, Serialize)]
pub struct AdTotals {
    pub clicks: u64,
    pub impressions: u64,
}

const TOP_VIEWED_LIMIT: usize = 5;

/// Compute all dashboard statistics from a fan-out read over the live
/// stores. Reads never fail: a store that could not load started empty, so
/// the worst case is all-zero numbers.
pub async fn get_stats(catalog: &Catalog) -> DashboardStats {
    let (movies, series, ads, users, servers) = tokio::join!(
        catalog.movies.list(),
        catalog.series.list(),
        catalog.ads.list(),
        catalog.users.list(),
        catalog.servers.list(),
    );

    let average_movie_rating = if movies.is_empty() {
        0.0
    } else {
        movies.iter().map(|m| m.rating).sum::<f64>() / movies.len() as f64
    };

    let total_views =
        movies.iter().map(|m| m.views).sum::<u64>() + series.iter().map(|s| s.views).sum::<u64>();

    let mut top_viewed: Vec<TopViewed> = movies
        .iter()
        .map(|m| TopViewed {
            id: m.id.clone(),
            title: m.title.clone(),
            views: m.views,
        })
        .chain(series.iter().map(|s| TopViewed {
            id: s.id.clone(),
            title: s.title.clone(),
            views: s.views,
        }))
        .collect();
    top_viewed.sort_by(|a, b| b.views.cmp(&a.views));
    top_viewed.truncate(TOP_VIEWED_LIMIT);

    DashboardStats {
        total_movies: movies.len() as i64,
        total_series: series.len() as i64,
        total_users: users.len() as i64,
        total_servers: servers.len() as i64,
        active_ads: ads.iter().filter(|a| a.is_active).count() as i64,
        featured_movies: movies.iter().filter(|m| m.is_featured).count() as i64,
        trending_movies: movies.iter().filter(|m| m.is_trending).count() as i64,
        average_movie_rating,
        total_views,
        top_viewed,
        ad_totals: AdTotals {
            clicks: ads.iter().map(|a| a.click_count).sum(),
            impressions: ads.iter().map(|a| a.impression_count).sum(),
        },
    }
}
