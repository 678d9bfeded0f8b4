use crate::{
    error::{Error, Result},
    solver::{
        assignment::Assignment,
        problem::{DomainRestrictions, Problem},
        variable::{Variable, VariableId},
    },
};

/// A single grid cell, identified by its one-indexed row and column.
#[derive(Debug)]
pub struct Cell {
    id: VariableId,
    row: i64,
    column: i64,
    domain: Vec<i64>,
}

impl Cell {
    fn new(id: VariableId, row: i64, column: i64, size: i64) -> Self {
        Self {
            id,
            row,
            column,
            domain: (1..=size).collect(),
        }
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn column(&self) -> i64 {
        self.column
    }
}

impl Variable<i64> for Cell {
    fn id(&self) -> VariableId {
        self.id
    }

    fn domain(&self) -> &[i64] {
        &self.domain
    }
}

/// Fill an `n`×`n` grid with values `1..=n` so that no value repeats within
/// a row or a column.
#[derive(Debug)]
pub struct LatinSquare {
    size: i64,
    cells: Vec<Cell>,
}

impl LatinSquare {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyDomain {
                problem: "latin-square",
                size,
            });
        }
        let size = size as i64;
        let mut cells = Vec::with_capacity((size * size) as usize);
        for row in 1..=size {
            for column in 1..=size {
                let id = ((row - 1) * size + column - 1) as VariableId;
                cells.push(Cell::new(id, row, column, size));
            }
        }
        Ok(Self { size, cells })
    }

    /// Whether the two cells sit in the same row or the same column.
    fn shares_line(&self, a: VariableId, b: VariableId) -> bool {
        let (row_a, column_a) = self.position(a);
        let (row_b, column_b) = self.position(b);
        row_a == row_b || column_a == column_b
    }

    fn position(&self, id: VariableId) -> (i64, i64) {
        (i64::from(id) / self.size, i64::from(id) % self.size)
    }
}

impl Problem for LatinSquare {
    type Value = i64;
    type Var = Cell;

    fn variables(&self) -> &[Cell] {
        &self.cells
    }

    fn is_consistent(&self, assignment: &dyn Assignment<i64>) -> bool {
        let bindings = assignment.bindings();
        for (cell_a, value_a) in bindings.iter() {
            for (cell_b, value_b) in bindings.iter() {
                if cell_a >= cell_b {
                    continue;
                }
                if self.shares_line(*cell_a, *cell_b) && value_a == value_b {
                    return false;
                }
            }
        }
        true
    }

    fn domain_restrictions(&self, variable: &Cell, value: &i64) -> DomainRestrictions<i64> {
        self.cells
            .iter()
            .map(|other| {
                let removed = if self.shares_line(variable.id(), other.id()) {
                    vec![*value]
                } else {
                    Vec::new()
                };
                (other.id(), removed)
            })
            .collect()
    }
}
