// Service module exports

pub mod selection;
