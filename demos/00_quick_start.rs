/// quick start - compute interest without any app state
use interest_desk::{format_inr, InterestEngine, InterestMode, InterestRequest};

fn main() {
    let engine = InterestEngine::new();

    // ₹1,00,000 at ₹3 per day per ₹1000 for 100 days
    let simple = engine.compute(&InterestRequest::new(100_000.0, 3.0, 100, InterestMode::FullSimple));
    println!("full simple:  SI {}  total {}", format_inr(simple.simple_interest), format_inr(simple.total));

    // same deposit, one year simple then daily compounding
    let custom = engine.compute(&InterestRequest::custom(100_000.0, 3.0, 400, 1.0));
    println!(
        "custom (1y):  SI {}  CI {}  total {}",
        format_inr(custom.simple_interest),
        format_inr(custom.compound_interest),
        format_inr(custom.total)
    );
}
