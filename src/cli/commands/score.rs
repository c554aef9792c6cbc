//! Score local images with the frontality heuristic.

use std::path::PathBuf;

use console::style;

use crate::cli::icons::{error, success};
use crate::models::Candidate;
use crate::ranking::{CandidateRanker, EdgeSymmetryScorer};

/// Print each file's frontality score and the file that would be chosen.
pub async fn cmd_score(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut candidates = Vec::with_capacity(files.len());
    for path in files {
        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let label = path.display().to_string();
                candidates.push(Candidate::new(label.clone(), label, bytes));
            }
            Err(e) => eprintln!("{} {}: {}", error(), path.display(), e),
        }
    }

    let (candidates, ranking) = tokio::task::spawn_blocking(move || {
        let ranking = CandidateRanker::<EdgeSymmetryScorer>::default().rank(&candidates);
        (candidates, ranking)
    })
    .await?;

    for (candidate, score) in candidates.iter().zip(&ranking.scores) {
        match score {
            Ok(score) => println!("  {} {:.4}  {}", style("→").dim(), score, candidate.label),
            Err(e) => eprintln!("{} {}: {}", error(), candidate.label, e),
        }
    }

    match ranking.best {
        Some(best) => println!(
            "{} Most frontal: {} ({:.4})",
            success(),
            style(&best.label).bold(),
            best.score
        ),
        None => anyhow::bail!("No decodable images"),
    }

    Ok(())
}
