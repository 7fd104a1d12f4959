use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split an area into header, content and footer rows
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// A rect of `width` x `height` centered in `area`, clamped to fit
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Centered popup sized as a percentage of `area`
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    center_rect(area, width, height)
}

/// Grow (or shrink) `rect` around its center by `scale`, staying inside `bounds`
pub fn scale_rect(rect: Rect, scale: f32, bounds: Rect) -> Rect {
    let width = ((f32::from(rect.width) * scale).round() as u16).max(1);
    let height = ((f32::from(rect.height) * scale).round() as u16).max(1);
    let cx = i32::from(rect.x) + i32::from(rect.width) / 2;
    let cy = i32::from(rect.y) + i32::from(rect.height) / 2;
    let x = cx - i32::from(width) / 2;
    let y = cy - i32::from(height) / 2;
    clamp_rect(x, y, width, height, bounds)
}

/// Shift `rect` horizontally by `dx` cells, staying inside `bounds`
pub fn offset_rect(rect: Rect, dx: i16, bounds: Rect) -> Rect {
    clamp_rect(
        i32::from(rect.x) + i32::from(dx),
        i32::from(rect.y),
        rect.width,
        rect.height,
        bounds,
    )
}

fn clamp_rect(x: i32, y: i32, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_x = i32::from(bounds.x) + i32::from(bounds.width - width);
    let max_y = i32::from(bounds.y) + i32::from(bounds.height - height);
    Rect::new(
        x.clamp(i32::from(bounds.x), max_x) as u16,
        y.clamp(i32::from(bounds.y), max_y) as u16,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let (header, content, footer) = create_standard_layout(Rect::new(0, 0, 80, 24), 5, 2);
        assert_eq!(header.height, 5);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 17);
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(10, 10, 20, 10);
        assert_eq!(center_rect(area, 10, 4), Rect::new(15, 13, 10, 4));
        assert_eq!(center_rect(area, 50, 50), area);
    }

    #[test]
    fn test_scale_rect_grows_around_center() {
        let bounds = Rect::new(0, 0, 100, 40);
        let rect = Rect::new(40, 10, 20, 4);
        assert_eq!(scale_rect(rect, 1.5, bounds), Rect::new(35, 9, 30, 6));
        assert_eq!(scale_rect(rect, 1.0, bounds), rect);
    }

    #[test]
    fn test_scaled_and_offset_rects_stay_in_bounds() {
        let bounds = Rect::new(0, 0, 30, 10);
        let rect = Rect::new(0, 0, 20, 6);
        let grown = scale_rect(rect, 1.5, bounds);
        assert!(grown.x >= bounds.x && grown.right() <= bounds.right());
        assert!(grown.bottom() <= bounds.bottom());

        assert_eq!(offset_rect(rect, -2, bounds).x, 0);
        assert_eq!(offset_rect(rect, 3, bounds).x, 3);
        assert_eq!(offset_rect(rect, 20, bounds).x, 10);
    }
}
