//! Board representation and attack counting.
//!
//! A board places exactly one queen per column; only the row of each queen
//! varies. This collapses the search space from N² cells to Nᴺ row vectors
//! and makes column conflicts unrepresentable — the fitness function only
//! has to count row and diagonal conflicts.

use rand::Rng;
use std::fmt;

/// One candidate placement of N queens, one per column.
///
/// Index `i` is the column, `rows()[i]` the row of the queen in that column,
/// always in `[0, n)`. Duplicate rows are representable and simply score as
/// attacks; no distinctness invariant is enforced.
///
/// # Examples
///
/// ```
/// use queens_hybrid::Board;
///
/// let solution = Board::from(vec![1, 3, 0, 2]);
/// assert_eq!(solution.attacks(), 0);
///
/// let worst = Board::from(vec![0, 0, 0, 0]);
/// assert_eq!(worst.attacks(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board with each queen's row drawn independently and
    /// uniformly from `[0, n)`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { rows }
    }

    /// Number of queens (= board side length).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The row of each queen, indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Counts attacking queen pairs.
    ///
    /// An unordered pair of columns (i, j), i < j, attacks iff the queens
    /// share a row or lie on a shared diagonal
    /// (`|i - j| == |rows[i] - rows[j]|`). O(N²), total over all boards;
    /// 0 means solved. Lower is better.
    pub fn attacks(&self) -> usize {
        let n = self.rows.len();
        let mut attacks = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rows[i] == self.rows[j]
                    || j - i == self.rows[i].abs_diff(self.rows[j])
                {
                    attacks += 1;
                }
            }
        }
        attacks
    }

    /// Whether no pair of queens attacks.
    pub fn is_solution(&self) -> bool {
        self.attacks() == 0
    }
}

impl From<Vec<usize>> for Board {
    fn from(rows: Vec<usize>) -> Self {
        Self { rows }
    }
}

impl fmt::Display for Board {
    /// Renders as a row list, e.g. `[1, 3, 0, 2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{row}")?;
        }
        write!(f, "]")
    }
}
