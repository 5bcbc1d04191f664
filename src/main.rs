#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	card_faces_sheet::{generate, FACES_RON_PATH},
	clap::Parser,
};

/// Writes the 13x4 card face sprite sheet description to resources/sprites/faces.ron.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {}

fn main() -> anyhow::Result<()> {
	let Args {} = Args::parse();
	generate(FACES_RON_PATH)?;
	Ok(())
}
