//! 分页器

/// 取第 `page_index` 页（从 1 开始）
///
/// 越界的页码、页码 0 或每页条数 0 都返回空切片
pub fn page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_index == 0 || page_size == 0 {
        return &[];
    }

    let start = match (page_index - 1).checked_mul(page_size) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// 总页数 = ceil(count / page_size)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// 界面显示用的总页数，至少为 1
pub fn display_total_pages(count: usize, page_size: usize) -> usize {
    total_pages(count, page_size).max(1)
}
