//! Lexicographic k-combination walking over index ranges.

/// Call `f` with every k-subset of `0..n` as a sorted index slice.
///
/// `k == 0` yields exactly one empty combination; `k > n` yields nothing.
pub(crate) fn for_each_combination(n: usize, k: usize, mut f: impl FnMut(&[usize])) {
    if k > n {
        return;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        f(&idx);
        if k == 0 {
            return;
        }
        // rightmost index that has room to advance
        let mut i = k - 1;
        while idx[i] == i + n - k {
            if i == 0 {
                return;
            }
            i -= 1;
        }
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
