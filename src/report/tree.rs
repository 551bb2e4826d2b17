use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::{Category, CategoryKind};

/// A category with its attached children, built fresh per aggregation pass.
#[derive(Debug, Clone)]
pub struct CategoryNode {
    pub category: Category,
    pub children: Vec<CategoryNode>,
}

/// Builds the reporting forest for one section.
///
/// Only active categories of the requested kind participate; a category
/// whose `parent_id` points outside the filtered set is promoted to root
/// rather than dropped. Input order is preserved for roots and siblings.
/// The parent graph is assumed acyclic; members of a cycle are reachable
/// from no root and fall out of the forest.
pub fn build_forest(categories: &[Category], kind: CategoryKind) -> Vec<CategoryNode> {
    let eligible: Vec<&Category> = categories
        .iter()
        .filter(|category| category.is_active() && category.kind == kind)
        .collect();
    let index: HashSet<Uuid> = eligible.iter().map(|category| category.id).collect();

    let mut children_of: HashMap<Uuid, Vec<&Category>> = HashMap::new();
    let mut roots: Vec<&Category> = Vec::new();
    for &category in &eligible {
        match category.parent_id {
            Some(parent_id) if index.contains(&parent_id) => {
                children_of.entry(parent_id).or_default().push(category);
            }
            _ => roots.push(category),
        }
    }

    roots
        .into_iter()
        .map(|category| build_node(category, &children_of))
        .collect()
}

fn build_node(category: &Category, children_of: &HashMap<Uuid, Vec<&Category>>) -> CategoryNode {
    let children = children_of
        .get(&category.id)
        .map(|entries| {
            entries
                .iter()
                .map(|&child| build_node(child, children_of))
                .collect()
        })
        .unwrap_or_default();
    CategoryNode {
        category: category.clone(),
        children,
    }
}

/// Ids of the node's category and every category beneath it.
pub fn subtree_ids(node: &CategoryNode) -> HashSet<Uuid> {
    let mut ids = HashSet::new();
    collect_ids(node, &mut ids);
    ids
}

fn collect_ids(node: &CategoryNode, ids: &mut HashSet<Uuid>) {
    ids.insert(node.category.id);
    for child in &node.children {
        collect_ids(child, ids);
    }
}

/// Depth-first lookup of a node by category id.
pub fn find_node<'a>(forest: &'a [CategoryNode], id: Uuid) -> Option<&'a CategoryNode> {
    for node in forest {
        if node.category.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaches_children_and_preserves_order() {
        let food = Category::new("Food", CategoryKind::Expense);
        let groceries = Category::new("Groceries", CategoryKind::Expense).with_parent(food.id);
        let dining = Category::new("Dining", CategoryKind::Expense).with_parent(food.id);
        let rent = Category::new("Rent", CategoryKind::Expense);
        let forest = build_forest(
            &[food.clone(), groceries.clone(), dining.clone(), rent.clone()],
            CategoryKind::Expense,
        );

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].category.id, food.id);
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[0].children[0].category.id, groceries.id);
        assert_eq!(forest[0].children[1].category.id, dining.id);
        assert_eq!(forest[1].category.id, rent.id);
    }

    #[test]
    fn filters_inactive_and_other_kinds() {
        let salary = Category::new("Salary", CategoryKind::Income);
        let rent = Category::new("Rent", CategoryKind::Expense);
        let retired = Category::new("Old", CategoryKind::Expense).inactive();
        let forest = build_forest(&[salary, rent.clone(), retired], CategoryKind::Expense);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].category.id, rent.id);
    }

    #[test]
    fn orphans_are_promoted_to_root() {
        let missing_parent = Uuid::new_v4();
        let orphan =
            Category::new("Orphan", CategoryKind::Expense).with_parent(missing_parent);
        let forest = build_forest(&[orphan.clone()], CategoryKind::Expense);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].category.id, orphan.id);
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn child_of_inactive_parent_is_promoted() {
        let parent = Category::new("Gone", CategoryKind::Expense).inactive();
        let child = Category::new("Child", CategoryKind::Expense).with_parent(parent.id);
        let forest = build_forest(&[parent, child.clone()], CategoryKind::Expense);

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].category.id, child.id);
    }

    #[test]
    fn subtree_ids_cover_three_levels() {
        let top = Category::new("Top", CategoryKind::Expense);
        let mid = Category::new("Mid", CategoryKind::Expense).with_parent(top.id);
        let leaf = Category::new("Leaf", CategoryKind::Expense).with_parent(mid.id);
        let forest = build_forest(
            &[top.clone(), mid.clone(), leaf.clone()],
            CategoryKind::Expense,
        );

        let ids = subtree_ids(&forest[0]);
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&leaf.id));

        let found = find_node(&forest, leaf.id).expect("leaf reachable");
        assert_eq!(found.category.id, leaf.id);
    }
}
