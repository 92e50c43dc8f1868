use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    /// Returns `None` once the edit distance exceeds the algorithm's cost budget.
    fn compute_shortest_edit(&self) -> Option<Self::Trace>;
    fn backtrack(&self) -> Option<Self::EditPath>;
    fn diff(&self) -> Option<Self::EditScript>;
}

/// Greedy Myers diff over two token slices.
///
/// The trace keeps, for every edit distance `d`, only the diagonals that round
/// `d - 1` could have reached (`-(d-1)..=d-1`), so memory grows with the square
/// of the edit distance instead of `d * (n + m)`. `max_cost` caps `d`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    max_cost: usize,
}

impl<T> MyersDiff<'_, T> {
    // furthest x on diagonal k, read from a trace row that covers -(d-1)..=d-1
    fn furthest(row: &[isize], d: isize, k: isize) -> isize {
        row[(k + d - 1) as usize]
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;
    type EditScript = Vec<Edit<T>>;

    fn compute_shortest_edit(&self) -> Option<Self::Trace> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let max_d = (n + m).min(self.max_cost as isize);
        let offset = (max_d + 1) as usize;

        let mut v = vec![0; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=max_d {
            if d == 0 {
                trace.push(Vec::new());
            } else {
                let lo = offset + 1 - d as usize;
                let hi = offset + d as usize;
                trace.push(v[lo..hi].to_vec());
            }

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return Some(trace);
                }
            }
        }

        None
    }

    fn backtrack(&self) -> Option<Self::EditPath> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit()?;

        for (d, row) in trace.iter().enumerate().rev() {
            let d = d as isize;

            if d == 0 {
                while x > 0 && y > 0 {
                    edit_path.push((x - 1, y - 1, x, y));
                    x -= 1;
                    y -= 1;
                }
                break;
            }

            let k = x - y;
            let prev_k = if k == -d {
                k + 1
            } else if k == d {
                k - 1
            } else if Self::furthest(row, d, k - 1) + 1 > Self::furthest(row, d, k + 1) {
                k - 1
            } else {
                k + 1
            };

            let prev_x = Self::furthest(row, d, prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            edit_path.push((prev_x, prev_y, x, y));
            (x, y) = (prev_x, prev_y);
        }

        Some(edit_path)
    }

    fn diff(&self) -> Option<Self::EditScript> {
        let mut diff = Vec::new();

        for (prev_x, prev_y, x, y) in self.backtrack()? {
            if x == prev_x {
                // only y increased
                diff.push(Edit::Insert {
                    value: self.b[prev_y as usize].clone(),
                });
            } else if y == prev_y {
                // only x increased
                diff.push(Edit::Delete {
                    value: self.a[prev_x as usize].clone(),
                });
            } else {
                diff.push(Edit::Equal {
                    value: self.a[prev_x as usize].clone(),
                });
            }
        }

        diff.reverse();
        Some(diff)
    }
}
