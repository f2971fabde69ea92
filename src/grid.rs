//! # Grid
//!
//! Herein is the bounded 2-D coordinate space shared by the grid solvers. A
//! grid maps coordinates to [`Token`]s and answers 8-directional adjacency
//! queries. All coordinates lie within `[0, width) × [0, height)`;
//! out-of-bounds writes fail.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use crate::dictionary::{InvalidTokenError, Token, Tokenizer};

////////////////////////////////////////////////////////////////////////////////
//                                Coordinates.                                //
////////////////////////////////////////////////////////////////////////////////

/// A grid coordinate. The origin is the top-left corner; `x` grows rightward
/// along a row and `y` grows downward across rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Coord
{
	/// The column.
	pub x: usize,

	/// The row.
	pub y: usize
}

impl Coord
{
	/// Construct a coordinate.
	#[inline]
	pub const fn new(x: usize, y: usize) -> Self { Self { x, y } }
}

impl Display for Coord
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "({},{})", self.x, self.y)
	}
}

/// The 8 compass direction vectors, as `(dx, dy)` offsets.
pub const DIRECTIONS: [(i32, i32); 8] = [
	(-1, -1),
	(0, -1),
	(1, -1),
	(-1, 0),
	(1, 0),
	(-1, 1),
	(0, 1),
	(1, 1)
];

////////////////////////////////////////////////////////////////////////////////
//                                   Grid.                                    //
////////////////////////////////////////////////////////////////////////////////

/// A rectangular board of tokens, linearized in row-major order. Cells may be
/// vacant; vacant cells are invisible to adjacency queries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Grid
{
	/// The number of columns.
	width: usize,

	/// The number of rows.
	height: usize,

	/// The cells, in row-major order.
	cells: Vec<Option<Token>>
}

impl Grid
{
	/// Construct a vacant grid of the given dimensions.
	///
	/// # Arguments
	///
	/// * `width` - The number of columns.
	/// * `height` - The number of rows.
	///
	/// # Returns
	///
	/// A vacant grid.
	pub fn new(width: usize, height: usize) -> Self
	{
		Self
		{
			width,
			height,
			cells: vec![None; width * height]
		}
	}

	/// Construct a grid from equal-length rows of text, tokenized under the
	/// given policy. Row length is measured in tokens, so a `qu` counts as a
	/// single cell.
	///
	/// # Arguments
	///
	/// * `rows` - The rows, top to bottom.
	/// * `tokenizer` - The tokenization policy.
	///
	/// # Returns
	///
	/// The populated grid.
	///
	/// # Errors
	///
	/// * [`GridError::UnequalRows`] if the rows tokenize to different
	///   lengths.
	/// * [`GridError::InvalidToken`] if a row cannot be tokenized.
	pub fn from_rows<T: AsRef<str>>(
		rows: &[T],
		tokenizer: Tokenizer
	) -> Result<Self, GridError>
	{
		let mut tokenized = Vec::with_capacity(rows.len());
		for row in rows
		{
			tokenized.push(tokenizer.tokenize(row.as_ref())?);
		}
		let width = tokenized.first().map(Vec::len).unwrap_or(0);
		for row in &tokenized
		{
			if row.len() != width
			{
				return Err(GridError::UnequalRows {
					expected: width,
					actual: row.len()
				})
			}
		}
		let mut grid = Self::new(width, tokenized.len());
		for (y, row) in tokenized.into_iter().enumerate()
		{
			for (x, token) in row.into_iter().enumerate()
			{
				// Coordinates derived from the rows are in bounds by
				// construction.
				grid.set(Coord::new(x, y), token)?;
			}
		}
		Ok(grid)
	}

	/// Get the number of columns.
	#[inline]
	#[must_use]
	pub fn width(&self) -> usize { self.width }

	/// Get the number of rows.
	#[inline]
	#[must_use]
	pub fn height(&self) -> usize { self.height }

	/// Put a token at the given coordinate.
	///
	/// # Arguments
	///
	/// * `coord` - The target coordinate.
	/// * `token` - The token.
	///
	/// # Errors
	///
	/// [`GridError::OutOfBounds`] if the coordinate lies outside the grid.
	pub fn set(&mut self, coord: Coord, token: Token)
		-> Result<(), GridError>
	{
		if coord.x >= self.width || coord.y >= self.height
		{
			return Err(GridError::OutOfBounds {
				coord,
				width: self.width,
				height: self.height
			})
		}
		self.cells[coord.y * self.width + coord.x] = Some(token);
		Ok(())
	}

	/// Get the token at the given coordinate.
	///
	/// # Arguments
	///
	/// * `coord` - The target coordinate.
	///
	/// # Returns
	///
	/// The token, or `None` if the coordinate is out of bounds or the cell is
	/// vacant.
	#[must_use]
	pub fn get(&self, coord: Coord) -> Option<Token>
	{
		if coord.x >= self.width || coord.y >= self.height
		{
			return None
		}
		self.cells[coord.y * self.width + coord.x]
	}

	/// Iterate the coordinates of the grid in row-major order.
	pub fn coords(&self) -> impl Iterator<Item = Coord> + '_
	{
		(0..self.height).flat_map(move |y| {
			(0..self.width).map(move |x| Coord::new(x, y))
		})
	}

	/// Step one cell from the given coordinate in the given direction.
	///
	/// # Arguments
	///
	/// * `from` - The starting coordinate.
	/// * `direction` - The `(dx, dy)` direction vector.
	///
	/// # Returns
	///
	/// The neighboring coordinate, or `None` if the step leaves the grid.
	#[must_use]
	pub fn step(&self, from: Coord, direction: (i32, i32)) -> Option<Coord>
	{
		let x = from.x as i64 + direction.0 as i64;
		let y = from.y as i64 + direction.1 as i64;
		if x < 0 || y < 0
			|| x as usize >= self.width
			|| y as usize >= self.height
		{
			return None
		}
		Some(Coord::new(x as usize, y as usize))
	}

	/// Iterate the occupied 8-adjacent neighbors of the given coordinate,
	/// with their tokens.
	///
	/// # Arguments
	///
	/// * `to` - The coordinate whose neighbors are wanted.
	///
	/// # Returns
	///
	/// An iterator of `(coordinate, token)` pairs.
	pub fn adjacent(
		&self,
		to: Coord
	) -> impl Iterator<Item = (Coord, Token)> + '_
	{
		DIRECTIONS.iter().filter_map(move |&direction| {
			let coord = self.step(to, direction)?;
			self.get(coord).map(|token| (coord, token))
		})
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                  Errors.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete enumeration of [`Grid`] errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError
{
	/// A coordinate lies outside the configured dimensions.
	OutOfBounds
	{
		/// The offending coordinate.
		coord: Coord,

		/// The number of columns.
		width: usize,

		/// The number of rows.
		height: usize
	},

	/// The rows of a grid tokenize to different lengths.
	UnequalRows
	{
		/// The length of the first row, in tokens.
		expected: usize,

		/// The length of the offending row, in tokens.
		actual: usize
	},

	/// A row contains a character combination the tokenizer cannot
	/// represent.
	InvalidToken(InvalidTokenError)
}

impl Display for GridError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::OutOfBounds { coord, width, height } => write!(
				f,
				"{} not in bounds of {}×{}",
				coord, width, height
			),
			Self::UnequalRows { expected, actual } => write!(
				f,
				"all rows must be the same size: got {} tokens, expected {}",
				actual, expected
			),
			Self::InvalidToken(e) => write!(f, "{}", e)
		}
	}
}

impl Error for GridError
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		match self
		{
			Self::InvalidToken(e) => Some(e),
			_ => None
		}
	}
}

impl From<InvalidTokenError> for GridError
{
	#[inline]
	fn from(e: InvalidTokenError) -> Self { Self::InvalidToken(e) }
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::collections::HashSet;

	use crate::{
		dictionary::{Token, Tokenizer},
		grid::{Coord, Grid, GridError}
	};

	/// Build a fully occupied grid of the given dimensions, with a distinct
	/// token per cell.
	fn full_grid(width: usize, height: usize) -> Grid
	{
		let rows = (0..height)
			.map(|y| {
				(0..width)
					.map(|x| {
						char::from_digit(((x + y * width) % 10) as u32, 10)
							.unwrap()
					})
					.collect::<String>()
			})
			.collect::<Vec<_>>();
		Grid::from_rows(&rows, Tokenizer::Letters).unwrap()
	}

	/// On a 3×3 grid, corner cells have 3 neighbors, edge cells 5, and the
	/// interior cell 8.
	#[test]
	fn test_adjacent_counts()
	{
		let grid = full_grid(3, 3);
		for coord in grid.coords()
		{
			let expected = match (
				coord.x == 0 || coord.x == 2,
				coord.y == 0 || coord.y == 2
			)
			{
				(true, true) => 3,
				(false, false) => 8,
				_ => 5
			};
			assert_eq!(
				grid.adjacent(coord).count(),
				expected,
				"at {}",
				coord
			);
		}
	}

	/// Adjacency is symmetric: if `b` is adjacent to `a`, then `a` is
	/// adjacent to `b`.
	#[test]
	fn test_adjacent_symmetric()
	{
		let grid = full_grid(4, 3);
		for a in grid.coords()
		{
			let neighbors = grid
				.adjacent(a)
				.map(|(b, _)| b)
				.collect::<HashSet<_>>();
			for &b in &neighbors
			{
				assert!(
					grid.adjacent(b).any(|(back, _)| back == a),
					"{} adjacent to {} but not vice versa",
					b,
					a
				);
			}
		}
	}

	/// Out-of-bounds writes fail; out-of-bounds reads are a normal `None`.
	#[test]
	fn test_out_of_bounds()
	{
		let mut grid = Grid::new(3, 3);
		let outside = Coord::new(3, 0);
		assert_eq!(
			grid.set(outside, Token::from("x")),
			Err(GridError::OutOfBounds {
				coord: outside,
				width: 3,
				height: 3
			})
		);
		assert_eq!(grid.get(outside), None);
		assert!(grid.set(Coord::new(2, 2), Token::from("x")).is_ok());
		assert_eq!(grid.get(Coord::new(2, 2)), Some(Token::from("x")));
	}

	/// Rows of unequal token length are rejected.
	#[test]
	fn test_unequal_rows()
	{
		let result = Grid::from_rows(&["abc", "de"], Tokenizer::Letters);
		assert_eq!(
			result,
			Err(GridError::UnequalRows { expected: 3, actual: 2 })
		);
	}

	/// A `qu` on a die face occupies a single cell.
	#[test]
	fn test_qu_rows()
	{
		let grid = Grid::from_rows(&["quiz", "int"], Tokenizer::QuTile)
			.unwrap();
		assert_eq!(grid.width(), 3);
		assert_eq!(grid.height(), 2);
		assert_eq!(grid.get(Coord::new(0, 0)), Some(Token::from("qu")));
		assert_eq!(grid.get(Coord::new(1, 0)), Some(Token::from("i")));
		assert_eq!(grid.get(Coord::new(2, 0)), Some(Token::from("z")));
	}
}
