use chrono::{Duration, Utc};

use crate::models::InsertArticle;
use crate::storage::MemStorage;

/// Seed do catálogo inicial de artigos.
/// Só insere se a store estiver vazia.
pub fn seed_default_articles(storage: &MemStorage) {
    let count = storage.article_count();
    if count > 0 {
        log::info!("📰 Articles: {} already in store - skipping seed", count);
        return;
    }

    log::info!("📰 Articles: seeding launch catalogue...");

    let now = Utc::now();
    let articles = build_default_articles(now);

    for (article, views) in articles {
        let inserted = storage.insert_article_with_views(article, views);
        log::info!("   ✅ Seeded article {}: {}", inserted.id, inserted.title);
    }
}

/// The launch catalogue: one story per category, with realistic view
/// counts so the trending feed has an order from the first request.
fn build_default_articles(now: chrono::DateTime<Utc>) -> Vec<(InsertArticle, i64)> {
    vec![
        (
            InsertArticle {
                title: "Breakthrough in Quantum Computing Could Revolutionize Cybersecurity"
                    .into(),
                summary: "Scientists at MIT have announced a major breakthrough in quantum \
                          computing that could fundamentally change how we approach \
                          cybersecurity. The new quantum processor demonstrates unprecedented \
                          stability and error correction capabilities."
                    .into(),
                content: Some("Full article content here...".into()),
                source: "TechCrunch".into(),
                category: "technology".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        .into(),
                ),
                url: Some("https://techcrunch.com/quantum-breakthrough".into()),
                published_at: now - Duration::hours(2),
            },
            2300,
        ),
        (
            InsertArticle {
                title: "Global Climate Summit Reaches Historic Agreement".into(),
                summary: "World leaders have reached a unanimous agreement on new climate \
                          policies that could significantly impact global carbon emissions."
                    .into(),
                content: Some("Full article content here...".into()),
                source: "BBC News".into(),
                category: "politics".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1569163139394-de4e4f43e4e5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        .into(),
                ),
                url: Some("https://bbc.com/climate-summit".into()),
                published_at: now - Duration::hours(4),
            },
            1850,
        ),
        (
            InsertArticle {
                title: "Championship Final Breaks Viewership Records".into(),
                summary: "Last night's championship game drew the largest television audience \
                          in sports history, with over 120 million viewers worldwide."
                    .into(),
                content: Some("Full article content here...".into()),
                source: "ESPN".into(),
                category: "sports".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        .into(),
                ),
                url: Some("https://espn.com/championship-record".into()),
                published_at: now - Duration::hours(6),
            },
            5200,
        ),
        (
            InsertArticle {
                title: "Markets Surge Following Economic Report".into(),
                summary: "Major stock indices reached new highs after the latest economic \
                          indicators showed stronger than expected growth."
                    .into(),
                content: Some("Full article content here...".into()),
                source: "Wall Street Journal".into(),
                category: "business".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        .into(),
                ),
                url: Some("https://wsj.com/markets-surge".into()),
                published_at: now - Duration::hours(8),
            },
            3100,
        ),
        (
            InsertArticle {
                title: "New Study Reveals Promising Treatment Results".into(),
                summary: "Clinical trials for a new treatment show remarkable success rates, \
                          offering hope for patients with previously untreatable conditions."
                    .into(),
                content: Some("Full article content here...".into()),
                source: "Medical News Today".into(),
                category: "health".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1582719471384-894fbb16e074?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        .into(),
                ),
                url: Some("https://medicalnews.com/new-treatment".into()),
                published_at: now - Duration::hours(10),
            },
            1650,
        ),
        (
            InsertArticle {
                title: "Blockbuster Film Breaks Opening Weekend Records".into(),
                summary: "The highly anticipated sequel dominated box offices worldwide, \
                          earning over $300 million in its opening weekend."
                    .into(),
                content: Some("Full article content here...".into()),
                source: "Entertainment Weekly".into(),
                category: "entertainment".into(),
                image_url: Some(
                    "https://images.unsplash.com/photo-1489599894617-e40116ceb684?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                        .into(),
                ),
                url: Some("https://ew.com/blockbuster-record".into()),
                published_at: now - Duration::hours(12),
            },
            4750,
        ),
    ]
}
