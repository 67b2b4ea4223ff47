//! Named visual themes.

use serde::Serialize;

/// Five presentation-class tokens under one name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleTheme {
    pub name: &'static str,
    pub gradient: &'static str,
    pub sidebar: &'static str,
    pub card: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

const fn theme(
    name: &'static str,
    gradient: &'static str,
    sidebar: &'static str,
    card: &'static str,
    accent: &'static str,
    text: &'static str,
) -> StyleTheme {
    StyleTheme {
        name,
        gradient,
        sidebar,
        card,
        accent,
        text,
    }
}

pub static FLOWER_STYLES: [StyleTheme; 20] = [
    theme("Rose", "bg-gradient-to-br from-red-100 via-rose-200 to-pink-300", "bg-rose-900/10", "bg-white/60", "text-rose-600", "text-rose-950"),
    theme("Lily", "bg-gradient-to-tr from-slate-50 via-white to-slate-200", "bg-slate-900/5", "bg-white/80", "text-slate-600", "text-slate-900"),
    theme("Sunflower", "bg-gradient-to-br from-yellow-100 via-amber-200 to-orange-200", "bg-amber-900/10", "bg-white/60", "text-amber-700", "text-amber-950"),
    theme("Lavender", "bg-gradient-to-bl from-purple-100 via-violet-200 to-indigo-200", "bg-indigo-900/10", "bg-white/60", "text-indigo-600", "text-indigo-950"),
    theme("Cherry Blossom", "bg-gradient-to-r from-pink-100 via-pink-200 to-rose-100", "bg-pink-900/10", "bg-white/60", "text-pink-500", "text-pink-950"),
    theme("Orchid", "bg-gradient-to-br from-fuchsia-100 via-purple-200 to-fuchsia-300", "bg-fuchsia-900/10", "bg-white/60", "text-fuchsia-700", "text-fuchsia-950"),
    theme("Tulip", "bg-gradient-to-br from-red-100 via-orange-100 to-yellow-100", "bg-orange-900/10", "bg-white/60", "text-orange-600", "text-orange-950"),
    theme("Daisy", "bg-gradient-to-br from-green-50 via-white to-yellow-50", "bg-green-900/5", "bg-white/90", "text-green-600", "text-green-950"),
    theme("Lotus", "bg-gradient-to-br from-pink-50 via-rose-100 to-teal-50", "bg-teal-900/10", "bg-white/70", "text-teal-600", "text-teal-950"),
    theme("Jasmine", "bg-gradient-to-tr from-yellow-50 via-white to-green-50", "bg-stone-900/5", "bg-white/80", "text-stone-600", "text-stone-950"),
    theme("Poppy", "bg-gradient-to-br from-red-200 via-red-300 to-orange-200", "bg-red-900/10", "bg-white/60", "text-red-700", "text-red-950"),
    theme("Daffodil", "bg-gradient-to-br from-yellow-100 via-yellow-200 to-green-100", "bg-yellow-900/10", "bg-white/60", "text-yellow-600", "text-yellow-950"),
    theme("Hydrangea", "bg-gradient-to-br from-blue-100 via-indigo-200 to-purple-200", "bg-blue-900/10", "bg-white/60", "text-blue-600", "text-blue-950"),
    theme("Peony", "bg-gradient-to-br from-pink-200 via-rose-200 to-red-100", "bg-rose-900/10", "bg-white/60", "text-rose-600", "text-rose-950"),
    theme("Violet", "bg-gradient-to-br from-violet-200 via-purple-300 to-indigo-300", "bg-violet-900/10", "bg-white/60", "text-violet-700", "text-violet-950"),
    theme("Marigold", "bg-gradient-to-br from-orange-200 via-amber-300 to-yellow-200", "bg-orange-900/10", "bg-white/60", "text-orange-700", "text-orange-950"),
    theme("Hibiscus", "bg-gradient-to-br from-red-100 via-pink-300 to-rose-200", "bg-pink-900/10", "bg-white/60", "text-pink-600", "text-pink-950"),
    theme("Magnolia", "bg-gradient-to-br from-slate-100 via-pink-50 to-white", "bg-slate-900/5", "bg-white/80", "text-slate-500", "text-slate-900"),
    theme("Iris", "bg-gradient-to-br from-blue-200 via-indigo-300 to-purple-200", "bg-indigo-900/10", "bg-white/60", "text-indigo-700", "text-indigo-950"),
    theme("Dahlia", "bg-gradient-to-br from-rose-300 via-pink-400 to-red-300", "bg-rose-900/20", "bg-white/60", "text-rose-800", "text-rose-950"),
];

/// Theme with the given name, or the first theme when the name is unknown.
pub fn style_by_name(name: &str) -> &'static StyleTheme {
    FLOWER_STYLES
        .iter()
        .find(|s| s.name == name)
        .unwrap_or(&FLOWER_STYLES[0])
}

/// Uniformly random theme.
pub fn random_style<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static StyleTheme {
    &FLOWER_STYLES[rng.gen_range(0..FLOWER_STYLES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_falls_back_to_first_theme() {
        assert_eq!(style_by_name("Iris").name, "Iris");
        assert_eq!(style_by_name("Cactus").name, "Rose");
        assert_eq!(style_by_name("").name, "Rose");
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = FLOWER_STYLES.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn random_pick_comes_from_catalog() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let picked = random_style(&mut rng);
            assert_eq!(style_by_name(picked.name), picked);
        }
    }
}
