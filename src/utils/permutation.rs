// Permutation enumeration utilities

/// Advances the slice to its next permutation in lexicographic order,
/// in place. Returns false when the slice was the last permutation;
/// the slice is then left rearranged into ascending order.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix; the pivot is just before it
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let pivot = i - 1;

    // Rightmost element strictly greater than the pivot
    let mut j = items.len() - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();

    true
}

/// Number of permutations of n items, the natural exhaustive bound
/// for a brute-force search. Only meaningful for n <= 20; larger n
/// overflows u64 and is intractable to enumerate anyway.
pub fn factorial(n: usize) -> u64 {
    (1..=n as u64).product()
}
