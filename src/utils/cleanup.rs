use crate::math::{Point, Real};

/// Given an index buffer, remove from `points` every point that is not indexed.
pub fn remove_unused_points(points: &mut Vec<Point<Real>>, idx: &mut [[u32; 3]]) {
    let mut used = vec![false; points.len()];
    let mut remap: Vec<usize> = (0..points.len()).collect();

    for tri in idx.iter() {
        for id in tri {
            used[*id as usize] = true;
        }
    }

    let mut i = 0;
    while i != points.len() {
        if !used[i] {
            let _ = points.swap_remove(i);
            remap[points.len()] = i;
            used[i] = used[points.len()];
        } else {
            i += 1;
        }
    }

    for tri in idx.iter_mut() {
        for id in tri.iter_mut() {
            *id = remap[*id as usize] as u32;
        }
    }
}
