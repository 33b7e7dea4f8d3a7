#![forbid(unsafe_code)]

//! The layout-to-markup pass.
//!
//! Each block's inner content is a placeholder template chosen by its span:
//!
//! - 1×1: a centered icon dot.
//! - width ≥ 2, height 1: icon beside two text bars.
//! - anything taller or larger: icon above stacked text bars, with the
//!   third bar dropped for the narrow (width 1) shapes.
//!
//! Every block also carries a `col-span-12` mobile fallback so narrow
//! viewports degrade to single-column stacking; the grid-specific
//! directives are duplicated under the `md:` prefix.

use std::fmt::Write as _;

use bento_core::{Block, CellRect, GridConfig, Layout};

/// Content template classification by span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// 1×1: icon only.
    Icon,
    /// Wide and one row tall: horizontal icon + text.
    Horizontal,
    /// Tall or large: vertical stack; `third_bar` is false for the
    /// narrow one-column shapes.
    Vertical { third_bar: bool },
}

fn classify(rect: CellRect) -> Shape {
    if rect.w == 1 && rect.h == 1 {
        Shape::Icon
    } else if rect.w >= 2 && rect.h == 1 {
        Shape::Horizontal
    } else {
        Shape::Vertical {
            third_bar: rect.w != 1,
        }
    }
}

/// Generate the full markup document for a layout.
///
/// Pure and deterministic: re-running on an unchanged layout is
/// byte-for-byte identical, and the output does not depend on the
/// layout's internal ordering.
#[must_use]
pub fn generate(layout: &Layout, grid: GridConfig) -> String {
    let mut blocks: Vec<&Block> = layout.blocks().iter().collect();
    blocks.sort_by_key(|b| u32::from(b.rect.y) * u32::from(grid.cols) + u32::from(b.rect.x));

    let items = blocks
        .iter()
        .enumerate()
        .map(|(index, block)| emit_block(index, block))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "<div class=\"min-h-screen bg-gray-50 dark:bg-zinc-950 p-4 md:p-8 text-zinc-900 dark:text-white\">\n  <div class=\"mx-auto max-w-7xl grid grid-cols-{cols} auto-rows-[100px] gap-4\">\n{items}\n  </div>\n</div>",
        cols = grid.cols,
    )
}

fn emit_block(index: usize, block: &Block) -> String {
    let rect = block.rect;
    let classes = format!(
        "relative overflow-hidden rounded-xl border border-black/5 dark:border-white/10 {tint} \
         col-span-12 col-span-{w} md:col-span-{w} row-span-{h} md:row-span-{h} \
         col-start-{cs} md:col-start-{cs} row-start-{rs} md:row-start-{rs}",
        tint = block.tint.classes(),
        w = rect.w,
        h = rect.h,
        cs = rect.x + 1,
        rs = rect.y + 1,
    );

    let mut out = String::new();
    let _ = writeln!(out, "    <!-- Item {} -->", index + 1);
    let _ = writeln!(out, "    <div class=\"{classes}\">");
    push_content(&mut out, rect);
    out.push_str("    </div>");
    out
}

fn push_content(out: &mut String, rect: CellRect) {
    match classify(rect) {
        Shape::Icon => {
            out.push_str(
                "      <div class=\"w-full h-full flex items-center justify-center\">\n          \
                 <div class=\"w-8 h-8 rounded-full bg-black/5 dark:bg-white/10\"></div>\n      \
                 </div>\n",
            );
        }
        Shape::Horizontal => {
            out.push_str(
                "      <div class=\"w-full h-full flex items-center gap-4 px-4\">\n          \
                 <div class=\"w-10 h-10 rounded-full bg-black/5 dark:bg-white/10 shrink-0\"></div>\n          \
                 <div class=\"space-y-2 flex-1 min-w-0\">\n              \
                 <div class=\"h-2 w-2/3 bg-black/5 dark:bg-white/10 rounded-full\"></div>\n              \
                 <div class=\"h-2 w-full bg-black/5 dark:bg-white/5 rounded-full\"></div>\n          \
                 </div>\n      </div>\n",
            );
        }
        Shape::Vertical { third_bar } => {
            out.push_str(
                "      <div class=\"w-full h-full flex flex-col p-4\">\n          \
                 <div class=\"mb-auto\">\n              \
                 <div class=\"w-10 h-10 rounded-full bg-black/5 dark:bg-white/10 mb-4\"></div>\n          \
                 </div>\n          \
                 <div class=\"space-y-3 w-full\">\n              \
                 <div class=\"h-2 w-2/3 bg-black/5 dark:bg-white/10 rounded-full\"></div>\n              \
                 <div class=\"h-2 w-full bg-black/5 dark:bg-white/5 rounded-full\"></div>\n",
            );
            if third_bar {
                out.push_str(
                    "              <div class=\"h-2 w-1/2 bg-black/5 dark:bg-white/5 rounded-full\"></div>\n",
                );
            }
            out.push_str("          </div>\n      </div>\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_core::{BlockId, Tint};

    fn block(id: u64, x: u16, y: u16, w: u16, h: u16, tint: Tint) -> Block {
        Block::new(BlockId::new(id).unwrap(), CellRect::new(x, y, w, h), tint)
    }

    #[test]
    fn classification_matches_span_rules() {
        assert_eq!(classify(CellRect::new(0, 0, 1, 1)), Shape::Icon);
        assert_eq!(classify(CellRect::new(0, 0, 2, 1)), Shape::Horizontal);
        assert_eq!(classify(CellRect::new(0, 0, 5, 1)), Shape::Horizontal);
        assert_eq!(
            classify(CellRect::new(0, 0, 1, 2)),
            Shape::Vertical { third_bar: false }
        );
        assert_eq!(
            classify(CellRect::new(0, 0, 2, 2)),
            Shape::Vertical { third_bar: true }
        );
        assert_eq!(
            classify(CellRect::new(0, 0, 1, 5)),
            Shape::Vertical { third_bar: false }
        );
    }

    #[test]
    fn empty_layout_still_emits_the_shell() {
        let markup = generate(&Layout::new(), GridConfig::default());
        assert!(markup.starts_with("<div class=\"min-h-screen"));
        assert!(markup.contains("grid-cols-12 auto-rows-[100px] gap-4"));
        assert!(markup.ends_with("</div>"));
    }

    #[test]
    fn directives_are_one_based_with_mobile_fallback() {
        let layout = Layout::new().add(block(1, 3, 4, 2, 1, Tint::Teal));
        let markup = generate(&layout, GridConfig::default());
        assert!(markup.contains("col-span-12 col-span-2 md:col-span-2"));
        assert!(markup.contains("col-start-4 md:col-start-4"));
        assert!(markup.contains("row-start-5 md:row-start-5"));
        assert!(markup.contains("bg-teal-100 dark:bg-teal-900/50"));
    }

    #[test]
    fn blocks_emit_in_reading_order_not_insertion_order() {
        let late = block(1, 0, 0, 1, 1, Tint::Red);
        let early = block(2, 5, 5, 1, 1, Tint::Blue);
        let a = Layout::new().add(late).add(early);
        let b = Layout::new().add(early).add(late);

        let markup_a = generate(&a, GridConfig::default());
        let markup_b = generate(&b, GridConfig::default());
        assert_eq!(markup_a, markup_b);

        let red = markup_a.find("bg-red-100").unwrap();
        let blue = markup_a.find("bg-blue-100").unwrap();
        assert!(red < blue, "top-left block must come first");
    }

    #[test]
    fn generate_is_deterministic() {
        let layout = Layout::new()
            .add(block(1, 0, 0, 2, 2, Tint::Sky))
            .add(block(2, 4, 1, 2, 1, Tint::Rose))
            .add(block(3, 0, 3, 1, 2, Tint::Lime));
        let grid = GridConfig::default();
        assert_eq!(generate(&layout, grid), generate(&layout, grid));
    }

    #[test]
    fn tall_narrow_blocks_drop_the_third_bar() {
        let tall = Layout::new().add(block(1, 0, 0, 1, 3, Tint::Zinc));
        let markup = generate(&tall, GridConfig::default());
        assert_eq!(markup.matches("h-2 w-1/2").count(), 0);

        let large = Layout::new().add(block(1, 0, 0, 2, 3, Tint::Zinc));
        let markup = generate(&large, GridConfig::default());
        assert_eq!(markup.matches("h-2 w-1/2").count(), 1);
    }

    #[test]
    fn item_comments_number_sequentially() {
        let layout = Layout::new()
            .add(block(1, 6, 6, 1, 1, Tint::Red))
            .add(block(2, 0, 0, 1, 1, Tint::Blue));
        let markup = generate(&layout, GridConfig::default());
        let first = markup.find("<!-- Item 1 -->").unwrap();
        let second = markup.find("<!-- Item 2 -->").unwrap();
        assert!(first < second);
    }
}
