/// All `size`-element combinations of `0..n` in lexicographic order.
fn combinations_of_size(n: usize, size: usize) -> Vec<Vec<usize>> {
    if size == 0 || size > n {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..size).collect();
    loop {
        out.push(idx.clone());

        // Rightmost position that can still move forward.
        let mut i = size;
        while i > 0 && idx[i - 1] == n - size + i - 1 {
            i -= 1;
        }
        if i == 0 {
            return out;
        }
        idx[i - 1] += 1;
        for j in i..size {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// Every non-empty subset of `items`, smallest first; subsets of equal size
/// follow the positions of their elements in `items`.
pub fn non_empty_subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    (1..=items.len())
        .flat_map(|size| combinations_of_size(items.len(), size))
        .map(|indices| indices.into_iter().map(|i| items[i].clone()).collect())
        .collect()
}
