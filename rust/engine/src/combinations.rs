//! Fixed-order enumeration of k-subsets of pool indices.

/// Binomial coefficient C(n, k), zero when `k > n`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Iterator over every k-combination of `0..n`, as ascending index vectors in
/// lexicographic order: `[0, 1, 2]`, `[0, 1, 3]`, ... `[n-3, n-2, n-1]`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    idx: Vec<usize>,
    done: bool,
    started: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            idx: (0..k).collect(),
            done: k > n,
            started: false,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.idx.clone());
        }

        let k = self.idx.len();
        // rightmost position that can still move forward
        let Some(pos) = (0..k).rev().find(|&i| self.idx[i] < self.n - k + i) else {
            self.done = true;
            return None;
        };
        self.idx[pos] += 1;
        for i in pos + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        Some(self.idx.clone())
    }
}
