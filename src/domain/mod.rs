// Domain layer: the Component capability every participant of a chain implements.

pub mod ports;
