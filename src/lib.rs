#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	const_format::concatcp,
	std::{io, path::PathBuf},
};

pub type Vec2 = [usize; 2];
pub const X: usize = 0;
pub const Y: usize = 1;
pub const WIDTH: usize = 0;
pub const HEIGHT: usize = 1;

pub const TEXTURE_DIMENSIONS: Vec2 = [981, 381];
/// Columns (one per rank) by rows (one per suit).
pub const GRID_DIMENSIONS: Vec2 = [13, 4];
/// Distance between the origins of neighbouring cells. One pixel less than `SPRITE_DIMENSIONS`,
/// so adjacent sprites share their border column/row.
pub const STRIDE: Vec2 = [70, 95];
pub const SPRITE_DIMENSIONS: Vec2 = [71, 96];
pub const NUM_SPRITES: usize = GRID_DIMENSIONS[WIDTH] * GRID_DIMENSIONS[HEIGHT];

pub const FACES_RON_PATH: &str = concatcp!(env!("CARGO_MANIFEST_DIR"), "/resources/sprites/faces.ron");

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("failed to write {path:?}")]
	Write { path: PathBuf, source: io::Error },
}

/// Builds the face sheet and writes it to `path`, creating or truncating the file.
///
/// The write is neither atomic nor retried; a failure midway leaves whatever was flushed so far.
pub fn generate(path: impl AsRef<std::path::Path>) -> Result<sheet::SpriteSheet, Error> {
	let (path, sheet) = (path.as_ref(), sheet::SpriteSheet::faces());
	log::debug!("writing {} sprites to {path:?}", sheet.sprites.len());
	sheet.writeTo(path)?;
	Ok(sheet)
}

pub mod sheet {
	use {
		super::{
			card::Card, Error, Vec2, GRID_DIMENSIONS, HEIGHT, NUM_SPRITES, SPRITE_DIMENSIONS, STRIDE,
			TEXTURE_DIMENSIONS, WIDTH, X, Y,
		},
		core::fmt,
		log::trace,
		std::{
			fs::File,
			io::{self, BufWriter, Write},
			path::Path,
		},
	};

	/// One rectangle of the atlas, in pixels from the texture's top-left corner.
	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub struct Sprite {
		pub x: usize,
		pub y: usize,
		pub width: usize,
		pub height: usize,
	}

	impl Sprite {
		#[must_use]
		pub fn new(point: Vec2, dimensions: Vec2) -> Self {
			Self { x: point[X], y: point[Y], width: dimensions[WIDTH], height: dimensions[HEIGHT] }
		}

		#[must_use]
		pub fn fromCell(column: usize, row: usize) -> Self {
			Self::new([column * STRIDE[WIDTH], row * STRIDE[HEIGHT]], SPRITE_DIMENSIONS)
		}
	}

	impl fmt::Display for Sprite {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			let Self { x, y, width, height } = self;
			write!(f, "( x: {x}, y: {y}, width: {width}, height: {height} )")
		}
	}

	#[derive(Clone, Debug, PartialEq, Eq)]
	pub struct SpriteSheet {
		pub textureWidth: usize,
		pub textureHeight: usize,
		pub sprites: Vec<Sprite>,
	}

	impl SpriteSheet {
		/// Row-major: sprite `i` sits in column `i % 13`, row `i / 13`. Sprite indices are what the
		/// game refers to, so this order must not change.
		#[must_use]
		pub fn faces() -> Self {
			let ([columns, rows], [textureWidth, textureHeight]) = (GRID_DIMENSIONS, TEXTURE_DIMENSIONS);
			let mut sprites = Vec::with_capacity(NUM_SPRITES);
			for row in 0..rows {
				for column in 0..columns {
					let sprite = Sprite::fromCell(column, row);
					trace!("sprite #{}: {sprite}", sprites.len());
					sprites.push(sprite);
				}
			}
			assert_eq!(sprites.len(), NUM_SPRITES);
			Self { textureWidth, textureHeight, sprites }
		}

		#[must_use]
		pub fn face(&self, card: Card) -> Option<&Sprite> {
			self.sprites.get(card.index())
		}

		pub fn writeTo(&self, path: &Path) -> Result<(), Error> {
			let write = || -> io::Result<()> {
				let mut file = BufWriter::new(File::create(path)?);
				write!(file, "{self}")?;
				file.flush()
			};
			write().map_err(|source| Error::Write { path: path.to_owned(), source })
		}
	}

	impl fmt::Display for SpriteSheet {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			const INDENT: &str = "    ";
			write!(
				f,
				"(\n{INDENT}texture_width: {},\n{INDENT}texture_height: {},\n{INDENT}sprites: [\n",
				self.textureWidth, self.textureHeight,
			)?;
			for (i, sprite) in self.sprites.iter().enumerate() {
				if i != 0 {
					f.write_str(",\n")?;
				}
				write!(f, "{INDENT}{INDENT}{sprite}")?;
			}
			write!(f, "\n{INDENT}]\n)")
		}
	}

	#[cfg(test)]
	mod tests {
		use {super::*, crate::card::{Rank, Suit}};

		#[test]
		fn faces_are_row_major() {
			let sheet = SpriteSheet::faces();
			assert_eq!(sheet.sprites.len(), 52);
			for (i, sprite) in sheet.sprites.iter().enumerate() {
				assert_eq!(*sprite, Sprite { x: (i % 13) * 70, y: (i / 13) * 95, width: 71, height: 96 });
			}
		}

		#[test]
		fn last_sprite_fits_in_texture() {
			let sheet = SpriteSheet::faces();
			let last = sheet.sprites.last().unwrap();
			assert_eq!((last.x, last.y), (840, 285));
			assert!(last.x + last.width <= sheet.textureWidth);
			assert!(last.y + last.height <= sheet.textureHeight);
		}

		#[test]
		fn sprite_display() {
			assert_eq!(Sprite::fromCell(1, 2).to_string(), "( x: 70, y: 190, width: 71, height: 96 )");
		}

		#[test]
		fn empty_sheet_keeps_the_blank_line() {
			let sheet = SpriteSheet { textureWidth: 1, textureHeight: 2, sprites: Vec::new() };
			assert_eq!(sheet.to_string(), "(\n    texture_width: 1,\n    texture_height: 2,\n    sprites: [\n\n    ]\n)");
		}

		#[test]
		fn face_lookup() {
			let sheet = SpriteSheet::faces();
			assert_eq!(sheet.face(Card::new(Rank::Ace, Suit::Spade)), Some(&Sprite::fromCell(0, 0)));
			assert_eq!(sheet.face(Card::new(Rank::Queen, Suit::Club)), Some(&Sprite::fromCell(11, 2)));
			assert_eq!(sheet.face(Card::new(Rank::King, Suit::Diamond)), sheet.sprites.last());
		}
	}
}

/// Cards as the game addresses them in the face sheet: one row per suit, one column per rank.
pub mod card {
	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub enum Color {
		Black,
		Red,
	}

	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub enum Suit {
		Spade,
		Heart,
		Club,
		Diamond,
	}

	impl Suit {
		pub const ALL: [Self; 4] = [Self::Spade, Self::Heart, Self::Club, Self::Diamond];

		#[must_use]
		pub fn color(self) -> Color {
			match self {
				Self::Spade | Self::Club => Color::Black,
				Self::Heart | Self::Diamond => Color::Red,
			}
		}
	}

	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub enum Rank {
		Ace,
		Two,
		Three,
		Four,
		Five,
		Six,
		Seven,
		Eight,
		Nine,
		Ten,
		Jack,
		Queen,
		King,
	}

	impl Rank {
		pub const ALL: [Self; 13] = [
			Self::Ace,
			Self::Two,
			Self::Three,
			Self::Four,
			Self::Five,
			Self::Six,
			Self::Seven,
			Self::Eight,
			Self::Nine,
			Self::Ten,
			Self::Jack,
			Self::Queen,
			Self::King,
		];

		#[must_use]
		pub fn next(self) -> Option<Self> {
			Self::ALL.get(self as usize + 1).copied()
		}

		/// Whether `self` comes right after `other`.
		#[must_use]
		pub fn isNext(self, other: Self) -> bool {
			other.next() == Some(self)
		}
	}

	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
	pub struct Card {
		rank: Rank,
		suit: Suit,
	}

	impl Card {
		#[must_use]
		pub fn new(rank: Rank, suit: Suit) -> Self {
			Self { rank, suit }
		}

		#[must_use]
		pub fn rank(self) -> Rank {
			self.rank
		}

		#[must_use]
		pub fn suit(self) -> Suit {
			self.suit
		}

		/// Index of this card's sprite in the face sheet.
		#[must_use]
		pub fn index(self) -> usize {
			self.rank as usize + self.suit as usize * Rank::ALL.len()
		}
	}

}
