//! 0-1 knapsack by bottom-up tabulation.
//!
//! Items are given as two index-aligned slices, `values[i]` and `weights[i]`,
//! and each item may be packed at most once. All quantities are `i64`; a table
//! cell that would exceed `i64::MAX` is reported as [`Error::Overflow`] rather
//! than wrapping.

use log::{debug, trace};
use ndarray::Array2;
use num_traits::CheckedAdd;

use crate::cs::error::{Error, Result};

/// An optimal packing: the value reached, the weight it uses and the items
/// chosen (ascending indices into the input slices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    pub value: i64,
    pub weight: i64,
    pub items: Vec<usize>,
}

/// Computes the maximum total value of a subset of items whose total weight
/// does not exceed `capacity`.
///
/// Builds the full `(n + 1) x (capacity + 1)` table, where row `i` holds the
/// best value using the first `i` items at every capacity. Row 0 is all zeros.
///
/// # Errors
///
/// * [`Error::InvalidArgument`] if `values` and `weights` differ in length or
///   any value, weight or the capacity is negative.
/// * [`Error::Overflow`] if the table cannot be allocated or a partial sum
///   exceeds `i64::MAX`.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::knapsack_max_value;
///
/// let values = [20, 5, 10, 40, 15, 25];
/// let weights = [1, 2, 3, 8, 7, 4];
/// assert_eq!(knapsack_max_value(&values, &weights, 10), Ok(60));
/// ```
///
/// # Complexity
/// * Time: O(n * capacity)
/// * Space: O(n * capacity)
pub fn knapsack_max_value(values: &[i64], weights: &[i64], capacity: i64) -> Result<i64> {
    let capacity = validate(values, weights, capacity)?;
    let table = build_table(values, weights, capacity)?;
    let best = table[[values.len(), capacity]];
    debug!("knapsack: best value {} at capacity {}", best, capacity);
    Ok(best)
}

/// Same result as [`knapsack_max_value`] using a single row of the table.
///
/// Capacities are visited from high to low so that the cell read for
/// "include this item" still belongs to the previous row, which keeps every
/// item to at most one use.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::knapsack_max_value_compact;
///
/// assert_eq!(knapsack_max_value_compact(&[60, 100, 120], &[10, 20, 30], 50), Ok(220));
/// ```
///
/// # Complexity
/// * Time: O(n * capacity)
/// * Space: O(capacity)
pub fn knapsack_max_value_compact(values: &[i64], weights: &[i64], capacity: i64) -> Result<i64> {
    let capacity = validate(values, weights, capacity)?;
    let columns = table_columns(1, capacity)?;

    let mut row = zeroed_cells(columns)?;
    for (&value, &weight) in values.iter().zip(weights) {
        let weight = as_index(weight);
        if weight > capacity {
            continue;
        }
        for j in (weight..=capacity).rev() {
            row[j] = row[j].max(take(&row[j - weight], &value)?);
        }
    }

    debug!("knapsack (compact): best value {} at capacity {}", row[capacity], capacity);
    Ok(row[capacity])
}

/// Solves the knapsack and reports which items make up the optimum.
///
/// The table is walked back from `(n, capacity)`: item `i - 1` is part of the
/// packing exactly when row `i` improved on row `i - 1` at the remaining
/// capacity.
///
/// # Examples
///
/// ```
/// use dynprog::cs::dynamic::knapsack::knapsack_solution;
///
/// let solution = knapsack_solution(&[60, 100, 120], &[10, 20, 30], 50).unwrap();
/// assert_eq!(solution.value, 220);
/// assert_eq!(solution.weight, 50);
/// assert_eq!(solution.items, vec![1, 2]);
/// ```
pub fn knapsack_solution(
    values: &[i64],
    weights: &[i64],
    capacity: i64,
) -> Result<KnapsackSolution> {
    let capacity = validate(values, weights, capacity)?;
    let table = build_table(values, weights, capacity)?;

    let mut items = Vec::new();
    let mut remaining = capacity;
    for i in (1..=values.len()).rev() {
        if table[[i, remaining]] != table[[i - 1, remaining]] {
            trace!("knapsack: item {} taken with {} capacity left", i - 1, remaining);
            items.push(i - 1);
            remaining -= as_index(weights[i - 1]);
        }
    }
    items.reverse();

    let solution = KnapsackSolution {
        value: table[[values.len(), capacity]],
        weight: items.iter().map(|&i| weights[i]).sum(),
        items,
    };
    debug!(
        "knapsack: best value {} using {} items, weight {}",
        solution.value,
        solution.items.len(),
        solution.weight
    );
    Ok(solution)
}

/// Checks the preconditions and returns the capacity as a column index.
fn validate(values: &[i64], weights: &[i64], capacity: i64) -> Result<usize> {
    if values.len() != weights.len() {
        return Err(Error::invalid_argument(format!(
            "{} values but {} weights",
            values.len(),
            weights.len()
        )));
    }
    if capacity < 0 {
        return Err(Error::invalid_argument(format!(
            "capacity must be non-negative, got {capacity}"
        )));
    }
    if let Some(i) = values.iter().position(|&v| v < 0) {
        return Err(Error::invalid_argument(format!(
            "value of item {i} is negative ({})",
            values[i]
        )));
    }
    if let Some(i) = weights.iter().position(|&w| w < 0) {
        return Err(Error::invalid_argument(format!(
            "weight of item {i} is negative ({})",
            weights[i]
        )));
    }

    usize::try_from(capacity)
        .map_err(|_| Error::overflow(format!("capacity {capacity} does not fit in usize")))
}

/// Number of columns for a table with `rows` rows, refusing sizes that do
/// not fit the address space.
fn table_columns(rows: usize, capacity: usize) -> Result<usize> {
    let max_cells = isize::MAX as usize / std::mem::size_of::<i64>();
    capacity
        .checked_add(1)
        .filter(|&columns| rows.checked_mul(columns).is_some_and(|c| c <= max_cells))
        .ok_or_else(|| {
            Error::overflow(format!(
                "a table of {rows} rows for capacity {capacity} is too large"
            ))
        })
}

fn build_table(values: &[i64], weights: &[i64], capacity: usize) -> Result<Array2<i64>> {
    let rows = values.len() + 1;
    let columns = table_columns(rows, capacity)?;
    debug!("knapsack: building {}x{} table", rows, columns);

    let cells = zeroed_cells(rows * columns)?;
    let mut table = Array2::from_shape_vec((rows, columns), cells)
        .map_err(|e| Error::overflow(format!("cannot shape a {rows}x{columns} table: {e}")))?;
    for i in 1..rows {
        let value = values[i - 1];
        let weight = as_index(weights[i - 1]);
        for j in 0..columns {
            let without = table[[i - 1, j]];
            table[[i, j]] = if weight > j {
                without
            } else {
                without.max(take(&table[[i - 1, j - weight]], &value)?)
            };
        }
    }
    Ok(table)
}

/// A zero-filled buffer of `cells` entries, or [`Error::Overflow`] if the
/// allocator refuses it.
fn zeroed_cells(cells: usize) -> Result<Vec<i64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|e| Error::overflow(format!("cannot allocate {cells} table cells: {e}")))?;
    buf.resize(cells, 0);
    Ok(buf)
}

/// Value of a cell that includes the current item.
fn take<T: CheckedAdd>(rest: &T, value: &T) -> Result<T> {
    rest.checked_add(value)
        .ok_or_else(|| Error::overflow("knapsack value exceeds the integer range"))
}

// Weights are validated non-negative; anything wider than usize can never fit.
fn as_index(weight: i64) -> usize {
    usize::try_from(weight).unwrap_or(usize::MAX)
}
