pub mod estimation;
