/// Iterator over every 5-element index combination drawn from `0..n`,
/// generated in lexicographic order. Yields nothing when `n < 5`.
pub struct ChooseFive {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl ChooseFive {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for ChooseFive {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that can be incremented
        let mut i = 4;
        loop {
            if self.indices[i] < self.n - (5 - i) {
                self.indices[i] += 1;

                // Reset all indices to the right
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }

            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_generates_21_combinations_from_7() {
        let combos: Vec<[usize; 5]> = ChooseFive::new(7).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn test_counts_match_binomial() {
        for n in 0..=10 {
            let expected = if n < 5 { 0 } else { binomial(n, 5) };
            assert_eq!(ChooseFive::new(n).count(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_all_combinations_valid() {
        for combo in ChooseFive::new(7) {
            assert!(combo.iter().all(|&i| i < 7));
            for i in 1..5 {
                assert!(combo[i] > combo[i - 1]);
            }
        }
    }

    #[test]
    fn test_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for combo in ChooseFive::new(9) {
            assert!(seen.insert(combo), "Duplicate combination found: {combo:?}");
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let combos: Vec<[usize; 5]> = ChooseFive::new(7).collect();
        for pair in combos.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should come before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_iterator_exhausts() {
        let mut iter = ChooseFive::new(5);
        assert_eq!(iter.next(), Some([0, 1, 2, 3, 4]));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
