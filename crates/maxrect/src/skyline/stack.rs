//! Largest rectangle under a histogram skyline (monotonic index stack).

/// Maximum `width × height` over all rectangles fitting under `heights`.
///
/// Single left-to-right pass over a stack of column indices whose heights are
/// non-decreasing from bottom to top, then a flush with `n` as the right
/// boundary. Each index is pushed and popped exactly once, so the pass is
/// O(n) amortized with O(n) stack space.
///
/// When `heights[top]` is popped at boundary `i`, `top` is the minimum over
/// the maximal window between the new stack top and `i`; the pop condition
/// `heights[top] >= heights[i]` pops the leftmost of equal-height neighbors
/// first, and the survivor's width then spans the whole equal-height run.
/// An empty stack plays the role of the `-1` left sentinel: the window
/// extends to column 0 and the width is the boundary itself.
pub fn largest_rectangle_area(heights: &[usize]) -> usize {
    let n = heights.len();
    let mut stack: Vec<usize> = Vec::with_capacity(n);
    let mut best = 0usize;
    for i in 0..n {
        while let Some(&top) = stack.last() {
            if heights[top] < heights[i] {
                break;
            }
            stack.pop();
            let width = match stack.last() {
                Some(&left) => i - left - 1,
                None => i,
            };
            best = best.max(heights[top] * width);
        }
        stack.push(i);
    }
    while let Some(top) = stack.pop() {
        let width = match stack.last() {
            Some(&left) => n - left - 1,
            None => n,
        };
        best = best.max(heights[top] * width);
    }
    best
}
