// Application layer: concrete surfaces the core engine is driven from.

pub mod terminal;
