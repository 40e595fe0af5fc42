use rand::Rng;

/// Glyph rendered for a lit cell.
pub const ON_GLYPH: char = '#';
/// Glyph rendered for a dark cell.
pub const OFF_GLYPH: char = '.';

/// An n x n grid of lights stored row-major, one byte per cell (0 or 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Generates a board of independently uniform random bits.
    ///
    /// Panics if `size` is zero; callers validate the size range up front.
    pub fn random(size: usize, rng: &mut impl Rng) -> Self {
        assert!(size > 0, "board size must be positive");
        let cells = (0..size * size).map(|_| rng.gen_range(0..=1u8)).collect();
        Self { size, cells }
    }

    /// Builds a board from an explicit cell vector.
    ///
    /// Panics unless `cells.len() == size * size`.
    pub fn from_cells(size: usize, cells: Vec<u8>) -> Self {
        assert!(size > 0, "board size must be positive");
        assert_eq!(cells.len(), size * size, "cell count must match board size");
        Self { size, cells }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell contents.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Flips the light at `idx` together with its in-bounds neighbors.
    ///
    /// This is the toggle propagation rule of the game: self plus up, down,
    /// left and right, clipped at the edges, no wraparound.
    pub fn toggle(&mut self, idx: usize) {
        let n = self.size;
        self.cells[idx] ^= 1;
        if idx % n != 0 {
            self.cells[idx - 1] ^= 1; // left
        }
        if idx % n != n - 1 {
            self.cells[idx + 1] ^= 1; // right
        }
        if idx >= n {
            self.cells[idx - n] ^= 1; // up
        }
        if idx + n < n * n {
            self.cells[idx + n] ^= 1; // down
        }
    }

    /// Returns true when every light is off.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// Renders the grid as n lines of n glyphs, each line newline-terminated.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                let lit = self.cells[row * self.size + col] == 1;
                out.push(if lit { ON_GLYPH } else { OFF_GLYPH });
            }
            out.push('\n');
        }
        out
    }
}

/// Parses a glyph string into bits: the on-glyph maps to 1, anything else to 0.
pub fn parse_glyphs(input: &str) -> Vec<u8> {
    input
        .chars()
        .map(|c| if c == ON_GLYPH { 1 } else { 0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_board_dimensions() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random(5, &mut rng);

        assert_eq!(board.size(), 5);
        assert_eq!(board.cells().len(), 25);
        assert!(board.cells().iter().all(|&c| c == 0 || c == 1));
    }

    #[test]
    #[should_panic(expected = "board size must be positive")]
    fn test_random_board_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(0);
        Board::random(0, &mut rng);
    }

    #[test]
    fn test_toggle_center_flips_cross() {
        let mut board = Board::from_cells(3, vec![0; 9]);
        board.toggle(4);

        // Center press lights the plus-shaped neighborhood.
        assert_eq!(board.cells(), &[0, 1, 0, 1, 1, 1, 0, 1, 0]);
    }

    #[test]
    fn test_toggle_corner_clips_at_edges() {
        let mut board = Board::from_cells(3, vec![0; 9]);
        board.toggle(0);

        assert_eq!(board.cells(), &[1, 1, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = Board::random(4, &mut rng);
        let mut board = original.clone();

        board.toggle(6);
        board.toggle(6);

        assert_eq!(board, original);
    }

    #[test]
    fn test_single_cell_board_toggle() {
        let mut board = Board::from_cells(1, vec![1]);
        board.toggle(0);
        assert!(board.is_clear());
    }

    #[test]
    fn test_render_worked_example() {
        let board = Board::from_cells(3, vec![1, 1, 1, 1, 0, 1, 0, 1, 1]);
        assert_eq!(board.render(), "###\n#.#\n.##\n");
    }

    #[test]
    fn test_is_clear() {
        assert!(Board::from_cells(2, vec![0; 4]).is_clear());
        assert!(!Board::from_cells(2, vec![0, 1, 0, 0]).is_clear());
    }

    #[test]
    fn test_parse_glyphs_maps_on_glyph_only() {
        assert_eq!(parse_glyphs("..##...#."), vec![0, 0, 1, 1, 0, 0, 0, 1, 0]);
        // Unknown characters count as off rather than failing.
        assert_eq!(parse_glyphs("#x# "), vec![1, 0, 1, 0]);
        assert_eq!(parse_glyphs(""), Vec::<u8>::new());
    }
}
