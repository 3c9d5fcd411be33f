//! End-to-end scenarios across the map surface, the entities and the widget hosts.

mod markers;
