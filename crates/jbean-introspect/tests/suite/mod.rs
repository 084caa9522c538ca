mod determinism;
mod introspection;
