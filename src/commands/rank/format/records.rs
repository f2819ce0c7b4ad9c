//! Records output formatting for rank command
//!
//! One `R` line per result:
//! `R <id> score=<score> name="<name>" tags=<tag,tag>`

use ranq_core::rank::ScoredItem;
use ranq_core::records::escape_quotes;

/// Output in records format
pub fn output_records(results: &[ScoredItem]) {
    for result in results {
        println!(
            "R {} score={:.1} name=\"{}\" tags={}",
            result.id,
            result.score,
            escape_quotes(&result.name),
            result.tags.join(",")
        );
    }
}
