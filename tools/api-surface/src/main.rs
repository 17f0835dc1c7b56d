// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Extracts the public declarations of a crate into a stable, diffable
//! listing.
//!
//! Point it at a crate directory and it parses every file under `src/`,
//! walks the public items (modules, structs and their public fields, enums
//! and their variants, traits and their methods, functions, type aliases,
//! constants), and prints an indented declaration tree. Two runs over the
//! same source produce identical output, so the listing can be checked in
//! and diffed across releases to spot accidental API changes.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use quote::ToTokens;

#[derive(Parser)]
#[command(name = "api-surface")]
#[command(about = "Prints the public API surface of a crate for diffing")]
struct Args {
	/// Path to the crate root (the directory containing Cargo.toml).
	crate_dir: PathBuf,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let src_dir = args.crate_dir.join("src");
	if !src_dir.is_dir() {
		bail!("{} has no src/ directory", args.crate_dir.display());
	}

	let pattern = src_dir.join("**").join("*.rs");
	let pattern = pattern
		.to_str()
		.with_context(|| format!("non-UTF-8 path: {}", pattern.display()))?;

	let mut files: Vec<PathBuf> = glob::glob(pattern)
		.context("invalid glob pattern")?
		.collect::<std::result::Result<_, _>>()
		.context("failed to walk src/")?;
	files.sort();

	for file in files {
		let source = fs::read_to_string(&file)
			.with_context(|| format!("failed to read {}", file.display()))?;
		let ast = syn::parse_file(&source)
			.with_context(|| format!("failed to parse {}", file.display()))?;

		let relative = file.strip_prefix(&args.crate_dir).unwrap_or(&file);
		println!("{}", relative.display());
		print_items(&ast.items, 1);
	}

	Ok(())
}

fn print_items(items: &[syn::Item], depth: usize) {
	for item in items {
		print_item(item, depth);
	}
}

fn print_item(item: &syn::Item, depth: usize) {
	match item {
		syn::Item::Mod(module) if is_public(&module.vis) => {
			emit(depth, &format!("mod {}", module.ident));
			if let Some((_, items)) = &module.content {
				print_items(items, depth + 1);
			}
		}
		syn::Item::Struct(strukt) if is_public(&strukt.vis) => {
			emit(depth, &format!("struct {}", strukt.ident));
			if let syn::Fields::Named(fields) = &strukt.fields {
				for field in &fields.named {
					if let (Some(name), true) = (&field.ident, is_public(&field.vis)) {
						let ty = tidy(&field.ty.to_token_stream().to_string());
						emit(depth + 1, &format!("{name}: {ty}"));
					}
				}
			}
		}
		syn::Item::Enum(item_enum) if is_public(&item_enum.vis) => {
			emit(depth, &format!("enum {}", item_enum.ident));
			for variant in &item_enum.variants {
				emit(depth + 1, &format!("case {}", variant.ident));
			}
		}
		syn::Item::Trait(item_trait) if is_public(&item_trait.vis) => {
			emit(depth, &format!("trait {}", item_trait.ident));
			for trait_item in &item_trait.items {
				if let syn::TraitItem::Fn(method) = trait_item {
					emit(depth + 1, &signature(&method.sig));
				}
			}
		}
		syn::Item::Fn(function) if is_public(&function.vis) => {
			emit(depth, &signature(&function.sig));
		}
		syn::Item::Type(alias) if is_public(&alias.vis) => {
			let ty = tidy(&alias.ty.to_token_stream().to_string());
			emit(depth, &format!("type {} = {}", alias.ident, ty));
		}
		syn::Item::Const(constant) if is_public(&constant.vis) => {
			let ty = tidy(&constant.ty.to_token_stream().to_string());
			emit(depth, &format!("const {}: {}", constant.ident, ty));
		}
		syn::Item::Static(statik) if is_public(&statik.vis) => {
			let ty = tidy(&statik.ty.to_token_stream().to_string());
			emit(depth, &format!("static {}: {}", statik.ident, ty));
		}
		syn::Item::Impl(impl_block) => print_impl(impl_block, depth),
		_ => {}
	}
}

fn print_impl(impl_block: &syn::ItemImpl, depth: usize) {
	let self_ty = tidy(&impl_block.self_ty.to_token_stream().to_string());

	match &impl_block.trait_ {
		Some((_, trait_path, _)) => {
			// Trait impls contribute no new declarations; one line records
			// the conformance itself.
			let trait_name = tidy(&trait_path.to_token_stream().to_string());
			emit(depth, &format!("impl {trait_name} for {self_ty}"));
		}
		None => {
			let methods: Vec<&syn::ImplItemFn> = impl_block
				.items
				.iter()
				.filter_map(|item| match item {
					syn::ImplItem::Fn(method) if is_public(&method.vis) => Some(method),
					_ => None,
				})
				.collect();

			if methods.is_empty() {
				return;
			}

			emit(depth, &format!("impl {self_ty}"));
			for method in methods {
				emit(depth + 1, &signature(&method.sig));
			}
		}
	}
}

fn is_public(vis: &syn::Visibility) -> bool {
	matches!(vis, syn::Visibility::Public(_))
}

fn signature(sig: &syn::Signature) -> String {
	tidy(&sig.to_token_stream().to_string())
}

/// Collapses the token-stream spacing into something close to rustfmt
/// output, so diffs stay readable.
fn tidy(rendered: &str) -> String {
	rendered
		.replace(" :: ", "::")
		.replace(" : ", ": ")
		.replace(" , ", ", ")
		.replace(" < ", "<")
		.replace(" > ", ">")
		.replace(" >", ">")
		.replace("< ", "<")
		.replace(" ( ", "(")
		.replace("( ", "(")
		.replace(" (", "(")
		.replace(" ) ", ") ")
		.replace(" )", ")")
		.replace(" ;", ";")
		.replace("& ", "&")
}

fn emit(depth: usize, line: &str) {
	println!("{}{}", "\t".repeat(depth), line);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tidy_normalizes_token_spacing() {
		assert_eq!(
			tidy("fn lookup (key : & str) -> Option < i64 >"),
			"fn lookup(key: &str) -> Option<i64>"
		);
		assert_eq!(tidy("std :: result :: Result"), "std::result::Result");
	}

	#[test]
	fn public_items_are_detected() {
		let file: syn::File = syn::parse_str(
			"pub struct A { pub x: i64, y: i64 }\nstruct Hidden;\npub fn f(a: bool) -> bool { a }",
		)
		.unwrap();

		let mut public = 0;
		for item in &file.items {
			match item {
				syn::Item::Struct(s) if is_public(&s.vis) => public += 1,
				syn::Item::Fn(f) if is_public(&f.vis) => public += 1,
				_ => {}
			}
		}
		assert_eq!(public, 2);
	}

	#[test]
	fn signature_rendering_is_stable() {
		let function: syn::ItemFn =
			syn::parse_str("pub fn get(key: &str, default_value: i64) -> i64 { default_value }")
				.unwrap();

		let first = signature(&function.sig);
		let second = signature(&function.sig);
		assert_eq!(first, second);
		assert!(first.starts_with("fn get("));
	}
}
