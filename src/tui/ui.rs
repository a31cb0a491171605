use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Widget},
    Frame,
};

use super::state::{AppState, ImageSlot};
use crate::{assets::THUMB_HEIGHT, CartView, DecodedImage, Product, Screen, View, ABOUT_MESSAGE};

/// Rows taken by one product card, borders included.
pub(crate) const CARD_HEIGHT: u16 = IMAGE_ROWS + 5;

/// Terminal rows of the card image area; each row shows two pixel rows.
const IMAGE_ROWS: u16 = (THUMB_HEIGHT as u16).div_ceil(2);

const PLACEHOLDER_TEXT: &str = "Loading Image...";

/// Main render function: frame chrome plus the active screen's content.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
        ])
        .split(f.area());

    let current = state.session.current();

    let title = Paragraph::new(format!("Safe Clothing - {}", current.title()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    match state.session.view() {
        View::Home { products } => render_home(f, chunks[1], state, products),
        View::Cart(cart) => render_cart(f, chunks[1], &cart),
        View::About => render_centered(f, chunks[1], ABOUT_MESSAGE, Style::default()),
    }

    let help = match current {
        Screen::Home => "Up/Down: Browse | Enter: Add to Cart | Tab/1-3: Switch Screen | q: Quit",
        Screen::Cart | Screen::About => "Tab/1-3: Switch Screen | q: Quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);

    render_status_bar(f, chunks[3], state);
    render_navigation_bar(f, chunks[4], current);
}

/// Render the catalog as a column of cards, scrolled to keep the selected
/// card visible.
fn render_home(f: &mut Frame, area: Rect, state: &AppState, products: &[Product]) {
    let fit = ((area.height / CARD_HEIGHT) as usize).max(1);
    let start = state.selected_product.saturating_sub(fit - 1);

    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); fit])
        .split(area);

    for (slot, (i, product)) in slots
        .iter()
        .zip(products.iter().enumerate().skip(start).take(fit))
    {
        let image = state.images.get(&product.image_asset_key);
        let in_cart = state.session.cart().count_of(product.id);
        render_product_card(f, *slot, product, image, in_cart, i == state.selected_product);
    }
}

/// Render a single product card: image, title, price and the add button.
fn render_product_card(
    f: &mut Frame,
    area: Rect,
    product: &Product,
    image: Option<&ImageSlot>,
    in_cart: usize,
    selected: bool,
) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(IMAGE_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    match image.and_then(ImageSlot::image) {
        Some(decoded) => f.render_widget(Thumbnail::new(decoded), rows[0]),
        None => {
            let placeholder = Paragraph::new(PLACEHOLDER_TEXT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            let middle = Rect {
                y: rows[0].y + rows[0].height / 2,
                height: rows[0].height.min(1),
                ..rows[0]
            };
            f.render_widget(placeholder, middle);
        }
    }

    let title = Paragraph::new(product.title.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(17)])
        .split(rows[2]);

    let mut price = vec![Span::raw(product.display_price())];
    if in_cart > 0 {
        price.push(Span::styled(
            format!("  ({in_cart} in cart)"),
            Style::default().fg(Color::Green),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(price)), bottom[0]);

    let button_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button = Paragraph::new("[ Add to Cart ]")
        .style(button_style)
        .alignment(Alignment::Right);
    f.render_widget(button, bottom[1]);
}

/// Render the coarse cart summary.
fn render_cart(f: &mut Frame, area: Rect, cart: &CartView<'_>) {
    let style = match cart {
        CartView::Empty => Style::default().fg(Color::DarkGray),
        CartView::Summary { .. } => Style::default().fg(Color::Green),
    };
    render_centered(f, area, &cart.message(), style);
}

/// Render one line of text in the middle of `area`.
fn render_centered(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[1]);
}

/// Render the status bar above the navigation bar.
fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let status_text = match state.status_message {
        Some(ref message) => format!(" {message}"),
        None => format!(" Cart: {} item(s)", state.session.cart().len()),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

/// Render the bottom navigation bar with the active screen highlighted.
fn render_navigation_bar(f: &mut Frame, area: Rect, current: Screen) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .map(|s| Line::from(format!(" {} {} ", s.index() + 1, s.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, area);
}

/// Draws a decoded image with half blocks: the upper pixel is the
/// foreground of `▀`, the lower one its background.
struct Thumbnail<'a> {
    image: &'a DecodedImage,
}

impl<'a> Thumbnail<'a> {
    fn new(image: &'a DecodedImage) -> Self {
        Self { image }
    }
}

impl Widget for Thumbnail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.min(self.image.width as u16);
        let height = area.height.min(self.image.height.div_ceil(2) as u16);

        for row in 0..height {
            for col in 0..width {
                let top = self.image.pixel(col as u32, row as u32 * 2);
                let bottom = self.image.pixel(col as u32, row as u32 * 2 + 1);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("▀");
                    cell.set_fg(top.map(rgb).unwrap_or(Color::Reset));
                    cell.set_bg(bottom.map(rgb).unwrap_or(Color::Reset));
                }
            }
        }
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}
