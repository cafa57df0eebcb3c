use log::debug;

/// Every permutation of every subset of `numbers`, from the empty subset up
/// to the full set. Subset selection is positional: repeated input values are
/// treated as distinct items, so they produce equal-valued but
/// position-distinct sequences.
pub fn subset_permutations(numbers: &[u64]) -> Vec<Vec<u64>> {
    debug!(
        "Enumerating subset permutations of {} source numbers",
        numbers.len()
    );

    let mut result = Vec::new();
    for subset in subsequences(numbers) {
        result.extend(permutations(&subset));
    }

    debug!("Generated {} candidate sequences", result.len());
    result
}

/// All 2^n subsequences of `numbers`, in positional order within each.
fn subsequences(numbers: &[u64]) -> Vec<Vec<u64>> {
    let mut result = vec![Vec::new()];
    for &n in numbers {
        let mut extended: Vec<Vec<u64>> = result
            .iter()
            .map(|subset| {
                let mut with_n = subset.clone();
                with_n.push(n);
                with_n
            })
            .collect();
        result.append(&mut extended);
    }
    result
}

/// All orderings of `items`, by picking each element in turn as the head.
fn permutations(items: &[u64]) -> Vec<Vec<u64>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }

    let mut result = Vec::new();
    for index in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            result.push(tail);
        }
    }
    result
}
