/// Sentinel returned for categories the table does not know.
pub const NO_RECOMMENDATION: &str = "No recommendation";

/// Companies hiring interns for each classifier category, in display order.
const INTERNSHIP_COMPANIES: &[(&str, &[&str])] = &[
    ("Web Development", &["Google", "Netflix", "Amazon", "Microsoft"]),
    ("Blockchain", &["Consensys", "Coinbase", "Binance", "Ethereum Foundation"]),
    ("HR", &["LinkedIn", "Microsoft", "Google", "Adobe"]),
    ("Data Science", &["Facebook", "Amazon", "Netflix", "Uber"]),
    ("Machine Learning", &["Google", "OpenAI", "NVIDIA", "Microsoft"]),
    ("Software Engineer", &["Amazon", "Apple", "Google", "Microsoft"]),
];

/// Looks up companies for a predicted category. Total: unknown categories
/// map to `[NO_RECOMMENDATION]`. Keys match exactly.
pub fn recommended_companies(category: &str) -> Vec<String> {
    INTERNSHIP_COMPANIES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, companies)| companies.iter().map(|c| c.to_string()).collect())
        .unwrap_or_else(|| vec![NO_RECOMMENDATION.to_string()])
}
