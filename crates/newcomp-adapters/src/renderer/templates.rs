//! C++ fragments assembled by [`super::CppRenderer`].
//!
//! Placeholders are the `{{VARIABLE}}` names of
//! [`newcomp_core::domain::RenderContext`], plus `FILE_NAME`, `AUTHOR`,
//! `VERSION` and `DATE` for the banner.

pub const BANNER: &str = "\
/**
******************************************************************************
* @file    {{FILE_NAME}}
* @author  {{AUTHOR}}
* @version {{VERSION}}
* @date    {{DATE}}
* @brief   {{CAPITALIZED}} component
******************************************************************************
*/
";

pub const HEADER_OPEN: &str = "\
#ifndef {{INCLUDE_GUARD}}
#define {{INCLUDE_GUARD}}

// Add your code here

";

pub const PERIODIC_INCLUDES: &str = "\
#include <chrono>
#include <utils/task.hpp>

";

pub const GENERIC_INCLUDES: &str = "\
#include <cstdint>

";

pub const HEADER_CLASS_OPEN: &str = "\
namespace {{CATEGORY}}
{
   /**
    * @brief Class {{COMPONENT}}
    *
    */
";

pub const CLASS_LINE: &str = "    class {{CLASS_NAME}}\n";

pub const PERIODIC_CLASS_LINE: &str = "    class {{CLASS_NAME}}: public utils::CTask\n";

pub const HEADER_PUBLIC: &str = "    {
        public:
            /* Constructor */
            {{CLASS_NAME}}(
                {{PARAMETER}}
            );
            /* Destructor */
            ~{{CLASS_NAME}}();
";

pub const CALLBACK_DECLARATION: &str = "            /* Serial callback implementation */
            void {{CALLBACK_NAME}}(char const * message, char * response);
";

pub const HEADER_PRIVATE: &str = "        private:
            /* private variables & method member */

";

pub const PERIODIC_PRIVATE: &str = "
            /* Run method */
            virtual void        _run() override;

            /** @brief Active flag  */
            bool m_isActive;

";

pub const HEADER_CLOSE: &str = "    }; // class {{CLASS_NAME}}
}; // namespace {{CATEGORY}}

#endif // {{INCLUDE_GUARD}}
";

pub const SOURCE_OPEN: &str = "\
#include \"{{HEADER_INCLUDE}}\"

// Add your code here
namespace {{CATEGORY}}
{
   /**
    * @brief Class constructor {{COMPONENT}}
    *
    */
    {{CLASS_NAME}}::{{CLASS_NAME}}(
        {{PARAMETER}}
    )
";

pub const PERIODIC_INITIALIZERS: &str = "    : utils::CTask(f_period)
    , m_isActive(false)
";

pub const SOURCE_BODY: &str = "    {
        /* constructor behaviour */
    }

    /** @brief  {{CLASS_NAME}} class destructor
     */
    {{CLASS_NAME}}::~{{CLASS_NAME}}()
    {
    }
";

pub const RUN_DEFINITION: &str = "
    /* Run method */
    void {{CLASS_NAME}}::_run()
    {
        /* Run method behaviour */
        if(!m_isActive) return;
    }
";

pub const CALLBACK_DEFINITION: &str = "
    /* Serial callback method */
    void {{CLASS_NAME}}::{{CALLBACK_NAME}}(char const * message, char * response)
    {
    }
";

pub const SOURCE_CLOSE: &str = "
}; // namespace {{CATEGORY}}
";

pub const PERIODIC_PARAMETER: &str = "std::chrono::milliseconds f_period";

pub const GENERIC_PARAMETER: &str = "uint32_t f_parameter";
