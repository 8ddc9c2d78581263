//! Menu Catalog
//!
//! The full menu as a static table, plus the tab selection over it.

use crate::models::{MenuCategory, MenuItem};

const fn item(name: &'static str, description: &'static str, price: &'static str) -> MenuItem {
    MenuItem { name, description, price, note: None }
}

const fn noted(
    name: &'static str,
    description: &'static str,
    price: &'static str,
    note: &'static str,
) -> MenuItem {
    MenuItem { name, description, price, note: Some(note) }
}

pub const MENU: &[MenuCategory] = &[
    MenuCategory {
        id: "espresso",
        label: "Espresso Bar",
        intro: "All espresso drinks begin with our house blend — a washed Ethiopian and natural Brazilian. Ask your barista about single-origin options.",
        items: &[
            item("Espresso", "A 25ml shot of our house blend, pulled at 93°C.", "€3.00"),
            item("Cortado", "Equal parts espresso and warm milk, no foam.", "€3.50"),
            item("Flat White", "Double ristretto, velvety micro-foam, 150ml.", "€4.00"),
            item("Latte", "Single origin espresso, steamed milk, delicate latte art.", "€4.50"),
            item("Cappuccino", "Equal thirds espresso, milk, and airy foam.", "€4.00"),
            item("Americano", "Double espresso, extended with hot water.", "€3.50"),
            item("Long Black", "Hot water first, double ristretto poured over. Preserves the crema.", "€3.50"),
            item("Macchiato", "Espresso marked with a spoonful of textured milk.", "€3.00"),
        ],
    },
    MenuCategory {
        id: "specialty",
        label: "Signatures & Specialties",
        intro: "Seasonally inspired drinks developed by our barista team. Each one is a small experiment in flavour.",
        items: &[
            noted(
                "Bliksem Signature",
                "Double ristretto, smoked vanilla syrup, oat milk. Served over a single large ice sphere.",
                "€6.50",
                "Our most ordered drink",
            ),
            item("Golden Storm", "Turmeric, ginger, black pepper, oat milk and a double espresso. Warming and complex.", "€5.50"),
            item("Jasmine Cold Brew", "24-hour cold-extracted Ethiopian, steeped with dried jasmine blossoms. Served black over ice.", "€5.50"),
            item("Spiced Honey Latte", "Cardamom and cinnamon-infused honey syrup, double espresso, warm oat milk.", "€5.50"),
            item("Matcha Ceremony", "Ceremonial grade matcha, hand-whisked with oat milk. Optional honey on the side.", "€5.00"),
            item("Midnight Chai", "Our house masala chai blend steeped for 8 minutes, served with steamed milk.", "€4.50"),
        ],
    },
    MenuCategory {
        id: "filter",
        label: "Filter Coffee",
        intro: "Brewed to order. We rotate three origins weekly — ask what's on the bar today.",
        items: &[
            noted(
                "Pour Over — V60",
                "Single origin, brewed to order. Rotating selection. Ask your barista for today's cup notes.",
                "€5.50",
                "Current origin: Yirgacheffe, Ethiopia",
            ),
            item("AeroPress", "A richer, syrupy brew. Naturally suited to medium and dark roast profiles.", "€5.00"),
            item("Batch Brew", "Our house filter, brewed fresh every 30 minutes. Ideal for a second or third cup.", "€3.50"),
            item("Cold Brew — Classic", "Slow-extracted for 20 hours. Bold, smooth, no acidity.", "€5.00"),
        ],
    },
    MenuCategory {
        id: "kitchen",
        label: "From the Kitchen",
        intro: "Everything is baked in-house each morning. The menu changes seasonally and sometimes daily.",
        items: &[
            noted(
                "Almond Frangipane Tart",
                "Buttery shell, almond cream, seasonal stone fruit, chamomile honey glaze.",
                "€5.00",
                "Best with our Ethiopian pour over",
            ),
            item("Butter Croissant", "Three-day laminated dough, 27 layers, served warm from the oven.", "€3.50"),
            item("Pain au Chocolat", "Dark Valrhona chocolate batons, same laminated dough as our croissant.", "€4.00"),
            item("Cardamom Bun", "Enriched dough, generous cardamom-butter filling, pearl sugar. Baked to order on weekends.", "€4.00"),
            item("Seasonal Toast", "Sourdough from our bakery partners, seasonal toppings. Ask for today's selection.", "€6.50"),
            item("Cheese & Charcuterie", "A curated small plate — two aged cheeses, one cured meat, mustard, and bread.", "€12.00"),
            item("Soft-Boiled Egg Plate", "Two eggs cooked at 64°C for 40 minutes, labneh, za'atar, and sourdough.", "€8.50"),
        ],
    },
];

pub const DIETARY_NOTE: &str = "All plant-based milks (oat, almond, soy) available at no extra charge. \u{a0}·\u{a0} Please inform us of any allergies before ordering. \u{a0}·\u{a0} Menu subject to seasonal change.";

/// Active tab of the menu page.
///
/// Holds an index into `MENU`, so the active category always exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuSelection {
    index: usize,
}

impl MenuSelection {
    /// Switch to the category with `id`. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        match MENU.iter().position(|c| c.id == id) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> &'static MenuCategory {
        &MENU[self.index]
    }

    pub fn active_id(&self) -> &'static str {
        self.active().id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Items shown in the grid
    pub fn visible_items(&self) -> &'static [MenuItem] {
        self.active().items
    }

    /// Odd item counts get a filler cell so the two-column grid stays closed
    pub fn needs_filler(&self) -> bool {
        self.visible_items().len() % 2 != 0
    }
}

/// Tab switch with an exit phase.
///
/// `target` follows every click and drives the tab bar. `shown` is what the
/// grid renders; it catches up to the latest `target` when the exit phase ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuTransition {
    target: MenuSelection,
    shown: MenuSelection,
    leaving: bool,
}

impl MenuTransition {
    /// Record a click. Returns true when a new exit phase starts and the
    /// caller should schedule `settle`.
    pub fn click(&mut self, id: &str) -> bool {
        if !self.target.select(id) {
            return false;
        }
        if self.leaving || self.target == self.shown {
            return false;
        }
        self.leaving = true;
        true
    }

    /// End the exit phase and show the latest target
    pub fn settle(&mut self) {
        self.shown = self.target;
        self.leaving = false;
    }

    pub fn target(&self) -> MenuSelection {
        self.target
    }

    pub fn shown(&self) -> MenuSelection {
        self.shown
    }

    pub fn is_leaving(&self) -> bool {
        self.leaving
    }
}
