#![forbid(unsafe_code)]

//! The fixed visual palette.
//!
//! A block's tint is picked at creation and never changes. The class pairs
//! cover the light and dark themes; the first three families use the
//! stronger 200/800 shades, the rest the softer 100/900 ones.

use serde::{Deserialize, Serialize};

/// A visual variant for a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tint {
    Slate,
    Zinc,
    Stone,
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
}

impl Tint {
    /// Every palette entry, in a stable order. Index into this with a
    /// random offset to assign a tint at creation.
    pub const ALL: [Tint; 20] = [
        Tint::Slate,
        Tint::Zinc,
        Tint::Stone,
        Tint::Red,
        Tint::Orange,
        Tint::Amber,
        Tint::Yellow,
        Tint::Lime,
        Tint::Green,
        Tint::Emerald,
        Tint::Teal,
        Tint::Cyan,
        Tint::Sky,
        Tint::Blue,
        Tint::Indigo,
        Tint::Violet,
        Tint::Purple,
        Tint::Fuchsia,
        Tint::Pink,
        Tint::Rose,
    ];

    /// The light/dark background utility classes for this tint.
    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Tint::Slate => "bg-slate-200 dark:bg-slate-800",
            Tint::Zinc => "bg-zinc-200 dark:bg-zinc-800",
            Tint::Stone => "bg-stone-200 dark:bg-stone-800",
            Tint::Red => "bg-red-100 dark:bg-red-900/50",
            Tint::Orange => "bg-orange-100 dark:bg-orange-900/50",
            Tint::Amber => "bg-amber-100 dark:bg-amber-900/50",
            Tint::Yellow => "bg-yellow-100 dark:bg-yellow-900/50",
            Tint::Lime => "bg-lime-100 dark:bg-lime-900/50",
            Tint::Green => "bg-green-100 dark:bg-green-900/50",
            Tint::Emerald => "bg-emerald-100 dark:bg-emerald-900/50",
            Tint::Teal => "bg-teal-100 dark:bg-teal-900/50",
            Tint::Cyan => "bg-cyan-100 dark:bg-cyan-900/50",
            Tint::Sky => "bg-sky-100 dark:bg-sky-900/50",
            Tint::Blue => "bg-blue-100 dark:bg-blue-900/50",
            Tint::Indigo => "bg-indigo-100 dark:bg-indigo-900/50",
            Tint::Violet => "bg-violet-100 dark:bg-violet-900/50",
            Tint::Purple => "bg-purple-100 dark:bg-purple-900/50",
            Tint::Fuchsia => "bg-fuchsia-100 dark:bg-fuchsia-900/50",
            Tint::Pink => "bg-pink-100 dark:bg-pink-900/50",
            Tint::Rose => "bg-rose-100 dark:bg-rose-900/50",
        }
    }
}
