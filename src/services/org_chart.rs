//! Organograma
//!
//! Agrupa departamentos por `parent_id` y, dentro de cada departamento,
//! colaboradores por `manager_id`. Padres desconocidos convierten el nodo en
//! raíz; los ciclos se rompen emitiendo cada nodo una sola vez.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeStatus};

/// Nodo genérico del árbol
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Cantidad de nodos del subárbol, incluyendo la raíz
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::size).sum::<usize>()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrgEmployee {
    pub id: Uuid,
    pub name: String,
    pub job_position_id: Option<Uuid>,
    pub status: EmployeeStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrgDepartment {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub manager_id: Option<Uuid>,
    pub headcount: usize,
    pub members: Vec<TreeNode<OrgEmployee>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrgChart {
    pub departments: Vec<TreeNode<OrgDepartment>>,
    /// Colaboradores sin departamento (o con departamento inexistente)
    pub unassigned: Vec<TreeNode<OrgEmployee>>,
}

/// Construir un bosque a partir de una lista plana con referencia al padre
pub fn build_forest<T, I, P, K>(items: Vec<T>, id_of: I, parent_of: P, sort_key: K) -> Vec<TreeNode<T>>
where
    T: Clone,
    I: Fn(&T) -> Uuid,
    P: Fn(&T) -> Option<Uuid>,
    K: Fn(&T) -> String,
{
    let index: HashMap<Uuid, usize> = items.iter().enumerate().map(|(i, item)| (id_of(item), i)).collect();

    let mut children: HashMap<Uuid, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let id = id_of(item);
        match parent_of(item) {
            Some(parent) if parent != id && index.contains_key(&parent) => {
                children.entry(parent).or_default().push(i);
            }
            _ => roots.push(i),
        }
    }

    let by_key = |a: &usize, b: &usize| sort_key(&items[*a]).cmp(&sort_key(&items[*b]));
    roots.sort_by(by_key);
    for list in children.values_mut() {
        list.sort_by(by_key);
    }

    let mut visited = HashSet::new();
    let mut forest = Vec::new();

    for root in roots {
        if let Some(node) = build_node(root, &items, &id_of, &children, &mut visited) {
            forest.push(node);
        }
    }

    // Nodos que sólo son alcanzables dentro de un ciclo
    loop {
        let next = (0..items.len())
            .filter(|i| !visited.contains(i))
            .min_by(|a, b| by_key(a, b));
        match next {
            Some(i) => {
                if let Some(node) = build_node(i, &items, &id_of, &children, &mut visited) {
                    forest.push(node);
                }
            }
            None => break,
        }
    }

    forest
}

fn build_node<T, I>(
    i: usize,
    items: &[T],
    id_of: &I,
    children: &HashMap<Uuid, Vec<usize>>,
    visited: &mut HashSet<usize>,
) -> Option<TreeNode<T>>
where
    T: Clone,
    I: Fn(&T) -> Uuid,
{
    if !visited.insert(i) {
        return None;
    }

    let kids = children
        .get(&id_of(&items[i]))
        .map(|list| {
            list.iter()
                .filter_map(|child| build_node(*child, items, id_of, children, visited))
                .collect()
        })
        .unwrap_or_default();

    Some(TreeNode {
        item: items[i].clone(),
        children: kids,
    })
}

fn employee_forest(employees: Vec<&Employee>) -> Vec<TreeNode<OrgEmployee>> {
    let managers: HashMap<Uuid, Option<Uuid>> = employees.iter().map(|e| (e.id, e.manager_id)).collect();
    let items: Vec<OrgEmployee> = employees
        .iter()
        .map(|e| OrgEmployee {
            id: e.id,
            name: e.full_name(),
            job_position_id: e.job_position_id,
            status: e.status,
        })
        .collect();

    build_forest(
        items,
        |e| e.id,
        |e| managers.get(&e.id).copied().flatten(),
        |e| e.name.to_lowercase(),
    )
}

/// Organograma completo
pub fn build_org_chart(departments: Vec<Department>, employees: &[Employee]) -> OrgChart {
    let known: HashSet<Uuid> = departments.iter().map(|d| d.id).collect();

    let mut by_department: HashMap<Uuid, Vec<&Employee>> = HashMap::new();
    let mut unassigned = Vec::new();
    for employee in employees {
        match employee.department_id {
            Some(dep) if known.contains(&dep) => by_department.entry(dep).or_default().push(employee),
            _ => unassigned.push(employee),
        }
    }

    let items: Vec<OrgDepartment> = departments
        .iter()
        .map(|d| {
            let members = employee_forest(by_department.remove(&d.id).unwrap_or_default());
            OrgDepartment {
                id: d.id,
                name: d.name.clone(),
                code: d.code.clone(),
                manager_id: d.manager_id,
                headcount: members.iter().map(TreeNode::size).sum(),
                members,
            }
        })
        .collect();

    let parents: HashMap<Uuid, Option<Uuid>> = departments.iter().map(|d| (d.id, d.parent_id)).collect();

    OrgChart {
        departments: build_forest(
            items,
            |d| d.id,
            |d| parents.get(&d.id).copied().flatten(),
            |d| d.name.to_lowercase(),
        ),
        unassigned: employee_forest(unassigned),
    }
}
