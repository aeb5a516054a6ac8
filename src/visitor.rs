use crate::ir::{
    ClassDeclaration, DirectiveNode, DocumentNode, ExpressionNode, HtmlContent, IntermediateNode,
    MethodDeclaration, NamespaceDeclaration,
};

/// The IntermediateNodeVisitor trait is the single traversal mechanism for IR trees.
///
/// Rules:
/// 1. Children are visited in document order.
/// 2. Implementers override `visit_*` methods to add behavior.
/// 3. Implementers call the matching `walk_*` function to keep descending unless pruning is intended.
pub trait IntermediateNodeVisitor {
    fn visit_document(&mut self, document: &DocumentNode) {
        walk_document(self, document);
    }

    fn visit_node(&mut self, node: &IntermediateNode) {
        walk_node(self, node);
    }

    fn visit_namespace(&mut self, namespace: &NamespaceDeclaration) {
        walk_namespace(self, namespace);
    }

    fn visit_class(&mut self, class: &ClassDeclaration) {
        walk_class(self, class);
    }

    fn visit_method(&mut self, method: &MethodDeclaration) {
        walk_method(self, method);
    }

    fn visit_html(&mut self, _html: &HtmlContent) {}

    fn visit_expression(&mut self, _expression: &ExpressionNode) {}

    fn visit_directive(&mut self, _directive: &DirectiveNode) {}

    fn visit_children(&mut self, children: &[IntermediateNode]) {
        walk_children(self, children);
    }
}

pub fn walk_document<V: IntermediateNodeVisitor + ?Sized>(visitor: &mut V, document: &DocumentNode) {
    visitor.visit_children(&document.children);
}

pub fn walk_children<V: IntermediateNodeVisitor + ?Sized>(
    visitor: &mut V,
    children: &[IntermediateNode],
) {
    for node in children {
        visitor.visit_node(node);
    }
}

pub fn walk_node<V: IntermediateNodeVisitor + ?Sized>(visitor: &mut V, node: &IntermediateNode) {
    match node {
        IntermediateNode::Namespace(n) => visitor.visit_namespace(n),
        IntermediateNode::Class(c) => visitor.visit_class(c),
        IntermediateNode::Method(m) => visitor.visit_method(m),
        IntermediateNode::Html(h) => visitor.visit_html(h),
        IntermediateNode::Expression(e) => visitor.visit_expression(e),
        IntermediateNode::Directive(d) => visitor.visit_directive(d),
    }
}

pub fn walk_namespace<V: IntermediateNodeVisitor + ?Sized>(
    visitor: &mut V,
    namespace: &NamespaceDeclaration,
) {
    visitor.visit_children(&namespace.children);
}

pub fn walk_class<V: IntermediateNodeVisitor + ?Sized>(visitor: &mut V, class: &ClassDeclaration) {
    visitor.visit_children(&class.children);
}

pub fn walk_method<V: IntermediateNodeVisitor + ?Sized>(visitor: &mut V, method: &MethodDeclaration) {
    visitor.visit_children(&method.children);
}

/// Collects the last namespace, class and method declarations seen in a tree.
#[derive(Debug, Default)]
pub struct DeclarationCollector {
    pub namespace: Option<NamespaceDeclaration>,
    pub class: Option<ClassDeclaration>,
    pub method: Option<MethodDeclaration>,
}

impl DeclarationCollector {
    pub fn collect(document: &DocumentNode) -> Self {
        let mut collector = Self::default();
        collector.visit_document(document);
        collector
    }
}

impl IntermediateNodeVisitor for DeclarationCollector {
    fn visit_namespace(&mut self, namespace: &NamespaceDeclaration) {
        self.namespace = Some(namespace.clone());
        walk_namespace(self, namespace);
    }

    fn visit_class(&mut self, class: &ClassDeclaration) {
        self.class = Some(class.clone());
        walk_class(self, class);
    }

    fn visit_method(&mut self, method: &MethodDeclaration) {
        self.method = Some(method.clone());
    }
}
