//! Adaptive Budget
//!
//! Let the driver escalate aggressiveness on its own to fit a token budget,
//! falling back to truncation only if pruning alone cannot make it.
//!
//! ```bash
//! cargo run --example adaptive_budget
//! ```

use squeezer::{squeeze, Options};

fn main() {
    let document = b"# Summary\n\
        Quarterly revenue grew by a modest amount this period.\n\
        Quarterly revenue grew by a modest amount this period.\n\
        Quarterly revenue grew by a modest amount this period.\n\
        Customer churn declined for the third straight quarter.\n\
        The team shipped four major features and nine minor ones.\n\
        Support ticket volume fell relative to the prior quarter.\n";

    // aggressiveness = -1 lets the driver derive a starting point, then
    // escalate as needed to fit max_tokens.
    let options = Options {
        aggressiveness: -1,
        max_tokens: 24,
        profile: "api".to_owned(),
    };

    let result = squeeze(document, &options).unwrap();

    println!("aggressiveness used: {}", result.aggressiveness);
    println!("truncated: {}", result.truncated);
    println!("tokens_out_approx: {}", result.tokens_out_approx);
    println!("---");
    println!("{}", String::from_utf8_lossy(&result.text));
}
