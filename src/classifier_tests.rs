//! Behavioral tests for the view and page classifier passes.

#[cfg(test)]
mod tests {
    use crate::classifier::{
        DocumentClassifierPass, MvcViewDocumentClassifierPass, RazorPageDocumentClassifierPass,
        MVC_VIEW_DOCUMENT_KIND, RAZOR_PAGE_DOCUMENT_KIND,
    };
    use crate::ir::{
        BaseType, CodeDocument, DirectiveNode, DocumentNode, HtmlContent, IntermediateNode,
    };
    use crate::options::ClassifierOptions;
    use crate::visitor::DeclarationCollector;

    fn run_view_pass(code: &CodeDocument) -> DocumentNode {
        let mut document = DocumentNode::for_code_document(code);
        MvcViewDocumentClassifierPass::default().classify(code, &mut document);
        document
    }

    fn class_name_for(code: &CodeDocument) -> String {
        let document = run_view_pass(code);
        DeclarationCollector::collect(&document)
            .class
            .expect("class declaration")
            .class_name
    }

    #[test]
    fn test_sets_document_kind() {
        let code = CodeDocument::with_paths("some-content", Some("Test.cshtml"), None);
        let document = run_view_pass(&code);
        assert_eq!(document.document_kind.as_deref(), Some(MVC_VIEW_DOCUMENT_KIND));
    }

    #[test]
    fn test_no_ops_if_document_kind_is_already_set() {
        let code = CodeDocument::with_paths("some-content", Some("Test.cshtml"), None);
        let mut document = DocumentNode::for_code_document(&code);
        document.document_kind = Some("some-value".to_string());
        document.children.push(IntermediateNode::Html(HtmlContent {
            content: "some-content".to_string(),
        }));
        let before = document.clone();

        let claimed = MvcViewDocumentClassifierPass::default().classify(&code, &mut document);

        assert!(!claimed);
        assert_eq!(document.document_kind.as_deref(), Some("some-value"));
        assert_eq!(document, before);
    }

    #[test]
    fn test_second_classification_is_a_no_op() {
        let code = CodeDocument::with_paths("some-content", None, Some("/Views/A.cshtml"));
        let pass = MvcViewDocumentClassifierPass::default();
        let mut document = DocumentNode::for_code_document(&code);

        assert!(pass.classify(&code, &mut document));
        let once = document.clone();
        assert!(!pass.classify(&code, &mut document));
        assert_eq!(document, once);
    }

    #[test]
    fn test_sets_namespace() {
        let code = CodeDocument::with_paths("some-content", Some("Test.cshtml"), None);
        let document = run_view_pass(&code);
        let namespace = DeclarationCollector::collect(&document).namespace.unwrap();
        assert_eq!(namespace.name, "AspNetCore");
    }

    #[test]
    fn test_configured_namespace() {
        let code = CodeDocument::with_paths("some-content", Some("Test.cshtml"), None);
        let pass = MvcViewDocumentClassifierPass::new(
            ClassifierOptions::default().with_root_namespace("Contoso.Views"),
        );
        let mut document = DocumentNode::for_code_document(&code);
        pass.classify(&code, &mut document);

        let namespace = DeclarationCollector::collect(&document).namespace.unwrap();
        assert_eq!(namespace.name, "Contoso.Views");
    }

    #[test]
    fn test_sets_class() {
        let code = CodeDocument::with_paths("some-content", Some("ignored"), Some("Test.cshtml"));
        let document = run_view_pass(&code);
        let class = DeclarationCollector::collect(&document).class.unwrap();

        assert_eq!(
            class.base_type,
            BaseType::WithTypeArgument {
                name: "global::Microsoft.AspNetCore.Mvc.Razor.RazorPage".to_string(),
                type_argument: "TModel".to_string(),
            }
        );
        assert_eq!(class.modifiers, vec!["public"]);
        assert_eq!(class.class_name, "Test");
    }

    #[test]
    fn test_null_file_path_sets_class() {
        let code = CodeDocument::with_paths("some-content", None, None);
        let document = run_view_pass(&code);
        let class = DeclarationCollector::collect(&document).class.unwrap();

        assert!(matches!(
            class.base_type,
            BaseType::WithTypeArgument { ref type_argument, .. } if type_argument == "TModel"
        ));
        assert_eq!(class.modifiers, vec!["public"]);
        assert_eq!(
            class.class_name,
            "AspNetCore_ec563e63d931b806184cb02f79875e4f3b21d1ca043ad06699424459128b58c0"
        );
    }

    #[test]
    fn test_uses_relative_path_to_generate_type_name() {
        let cases = [
            ("/Views/Home/Index.cshtml", "_Views_Home_Index"),
            (
                "/Areas/MyArea/Views/Home/About.cshtml",
                "_Areas_MyArea_Views_Home_About",
            ),
        ];
        for (relative_path, expected) in cases {
            let code =
                CodeDocument::with_paths("some-content", Some("ignored"), Some(relative_path));
            assert_eq!(class_name_for(&code), expected);
        }
    }

    #[test]
    fn test_uses_absolute_path_if_relative_path_is_not_set() {
        let code = CodeDocument::with_paths(
            "some-content",
            Some(r"x::\application\Views\Home\Index.cshtml"),
            None,
        );
        assert_eq!(class_name_for(&code), "x___application_Views_Home_Index");
    }

    #[test]
    fn test_sanitizes_class_name() {
        let code = CodeDocument::with_paths(
            "@page",
            Some(r"x:\Test.cshtml"),
            Some("path.with+invalid-chars"),
        );
        assert_eq!(class_name_for(&code), "path_with_invalid_chars");
    }

    #[test]
    fn test_sets_up_execute_async_method() {
        let code = CodeDocument::with_paths("some-content", Some("Test.cshtml"), None);
        let document = run_view_pass(&code);
        let method = DeclarationCollector::collect(&document).method.unwrap();

        assert_eq!(method.method_name, "ExecuteAsync");
        assert_eq!(method.return_type, "global::System.Threading.Tasks.Task");
        assert_eq!(method.modifiers, vec!["public", "async", "override"]);
    }

    #[test]
    fn test_scaffold_shape_and_existing_children_preserved() {
        let code = CodeDocument::with_paths("<p>a</p>", None, Some("/Views/A.cshtml"));
        let mut document = DocumentNode::for_code_document(&code);
        let body = IntermediateNode::Html(HtmlContent {
            content: "<p>a</p>".to_string(),
        });
        document.children.push(body.clone());

        MvcViewDocumentClassifierPass::default().classify(&code, &mut document);

        assert_eq!(document.children.len(), 2);
        assert_eq!(document.children[0], body);

        let IntermediateNode::Namespace(namespace) = &document.children[1] else {
            panic!("expected namespace, got {:?}", document.children[1]);
        };
        assert_eq!(namespace.children.len(), 1);
        let IntermediateNode::Class(class) = &namespace.children[0] else {
            panic!("expected class");
        };
        assert_eq!(class.children.len(), 1);
        assert!(matches!(class.children[0], IntermediateNode::Method(_)));
    }

    #[test]
    fn test_razor_page_requires_page_directive() {
        let code = CodeDocument::with_paths("<p/>", None, Some("/Pages/Index.cshtml"));
        let pass = RazorPageDocumentClassifierPass::default();
        let mut document = DocumentNode::for_code_document(&code);

        assert!(!pass.classify(&code, &mut document));
        assert!(!document.is_classified());
        assert!(document.children.is_empty());
    }

    #[test]
    fn test_razor_page_sets_plain_page_base() {
        let code = CodeDocument::with_paths("@page", None, Some("/Pages/Index.cshtml"));
        let mut document = DocumentNode::for_code_document(&code);
        document
            .children
            .push(IntermediateNode::Directive(DirectiveNode {
                name: "page".to_string(),
                tokens: vec!["\"{id?}\"".to_string()],
            }));

        assert!(RazorPageDocumentClassifierPass::default().classify(&code, &mut document));
        assert_eq!(document.document_kind.as_deref(), Some(RAZOR_PAGE_DOCUMENT_KIND));

        let declarations = DeclarationCollector::collect(&document);
        let class = declarations.class.unwrap();
        assert_eq!(class.class_name, "_Pages_Index");
        assert_eq!(
            class.base_type.to_string(),
            "global::Microsoft.AspNetCore.Mvc.RazorPages.Page"
        );
        assert_eq!(declarations.method.unwrap().method_name, "ExecuteAsync");
    }
}
