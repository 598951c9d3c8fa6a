use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for paperrec, isolated from any user configuration
pub fn paperrec() -> Command {
    let mut cmd = cargo_bin_cmd!("paperrec");
    cmd.env("PAPERREC_CONFIG_DIR", "/nonexistent/paperrec-test-config")
        .env_remove("PAPERREC_DATA")
        .env_remove("PAPERREC_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Ten papers: 1 and 2 share an abstract (up to stop words), 6 shares no terms
/// with 1. The last row repeats paper 3 exactly and is dropped on load.
pub const PAPERS_CSV: &str = "titles,abstracts,terms
Graph networks for molecules,graph neural networks learn node embeddings for molecules,cs.LG
Graph networks for the molecules,graph neural networks learn node embeddings for the molecules,cs.LG
Citation graphs,graph neural networks classify citation networks,cs.LG
Molecular property prediction,node embeddings improve molecules property prediction,cs.LG
Playing Atari,reinforcement learning agents play atari games,cs.AI
\"Medieval pottery, revisited\",medieval pottery glaze chemistry kilns,history
Policy gradients for robots,reinforcement learning policy gradients robotics,cs.RO
Translation with transformers,transformer language models translate text,cs.CL
Summarization,language models summarize text documents,cs.CL
Legged locomotion,robotics policy gradients locomotion control,cs.RO
Citation graphs,graph neural networks classify citation networks,cs.LG
";

/// Write the fixture corpus into `dir` and return its path
pub fn write_papers(dir: &Path) -> PathBuf {
    let path = dir.join("papers.csv");
    fs::write(&path, PAPERS_CSV).expect("write fixture corpus");
    path
}
