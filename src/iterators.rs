pub mod position_iterator;
