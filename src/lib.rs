// TODO:
// [ ] Entry-style API to read-modify-write a number with a single walk
// [ ] Prefix-compressed (radix) nodes to cut memory on long unique suffixes

mod directory;
mod iter;
mod node;
mod remove;


pub use directory::Directory;
