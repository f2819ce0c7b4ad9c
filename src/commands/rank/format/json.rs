//! JSON output formatting for rank command

use ranq_core::error::Result;
use ranq_core::rank::ScoredItem;

/// Output in JSON format
pub fn output_json(results: &[ScoredItem]) -> Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "name": r.name,
                "text": r.text,
                "tags": r.tags,
                "score": r.score,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
